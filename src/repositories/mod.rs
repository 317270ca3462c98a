pub mod slot_store;

pub use slot_store::{FileSlotRepository, InMemorySlotRepository, SlotRepository};
