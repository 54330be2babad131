pub mod storage;
pub mod theme;
pub mod viewport;
