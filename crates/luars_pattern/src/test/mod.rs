pub mod test_find_all;
#[cfg(feature = "serde")]
pub mod test_serde;
