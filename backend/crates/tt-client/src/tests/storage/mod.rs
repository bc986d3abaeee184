mod file_store;
mod memory_store;
