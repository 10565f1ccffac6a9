#![no_std]
mod contract;
mod error;
mod msg;
mod projection;
mod storage;

#[cfg(test)]
mod tests;
