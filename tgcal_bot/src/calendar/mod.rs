pub mod callbacks;
pub mod dto;
pub mod handler;
pub mod helpers;
pub mod storage;
