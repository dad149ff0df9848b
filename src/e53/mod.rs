pub mod intelligent_agriculture;
pub mod smart_covers;
