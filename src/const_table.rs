use lazy_static::lazy_static;

use std::collections::HashMap;

pub const LOC_X: &str = "LocX";
pub const LOC_Y: &str = "LocY";
pub const LOC_Z: &str = "LocZ";

lazy_static! {
    /// Object animation channels and the host's numeric codes for them.
    pub static ref CHANNEL_CODES: HashMap<&'static str, u16> = {
        let mut m = HashMap::new();
        m.insert(LOC_X, 1);
        m.insert(LOC_Y, 2);
        m.insert(LOC_Z, 3);
        m.insert("RotX", 7);
        m.insert("RotY", 8);
        m.insert("RotZ", 9);
        m.insert("SizeX", 13);
        m.insert("SizeY", 14);
        m.insert("SizeZ", 15);
        m
    };
}

pub fn channel_code(name: &str) -> Option<u16> {
    CHANNEL_CODES.get(name).copied()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_channels() {
        assert_eq!(channel_code(LOC_X), Some(1));
        assert_eq!(channel_code(LOC_Y), Some(2));
        assert_eq!(channel_code("Wiggle"), None);
    }
}
