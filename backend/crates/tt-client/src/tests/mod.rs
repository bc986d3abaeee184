mod client;
mod session;
mod storage;
