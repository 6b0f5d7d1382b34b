pub const LABEL_ORGANISATION: &str = "Organisation";

pub const PROP_ID: &str = "Id";
pub const PROP_NAME: &str = "Name";
