pub const BTN_PREV: &str = "Previous";
pub const BTN_NEXT: &str = "Next";

pub const TEXT_NO_IMAGE: &str = "No image has been found";
pub const TEXT_EMPTY_CATALOG: &str = "There are no paintings to show";
pub const TEXT_KEYS_HINT: &str = "Use ← → to browse";
