pub mod fractile;
pub mod test_utils;
