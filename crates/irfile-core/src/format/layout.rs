pub const LINE_SEPARATOR: char = '\n';
pub const KEY_VALUE_SEPARATOR: char = ':';
pub const RECORD_DELIMITER: &str = "#";

pub const FILETYPE_PREFIX: &str = "Filetype:";
pub const VERSION_PREFIX: &str = "Version:";

pub const KEY_NAME: &str = "name";
pub const KEY_TYPE: &str = "type";
pub const KEY_PROTOCOL: &str = "protocol";
pub const KEY_ADDRESS: &str = "address";
pub const KEY_COMMAND: &str = "command";
pub const KEY_FREQUENCY: &str = "frequency";
pub const KEY_DUTY_CYCLE: &str = "duty_cycle";
pub const KEY_DATA: &str = "data";

pub const TYPE_PARSED: &str = "parsed";
pub const TYPE_RAW: &str = "raw";

pub const HEX32_BYTES: usize = 4;
pub const DUTY_CYCLE_DECIMALS: usize = 6;
