pub mod choice_select;
pub mod status_region;

pub use choice_select::ChoiceSelect;
pub use status_region::StatusRegion;
