use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub object_name: Option<String>,
    pub container_name: Option<String>,
    pub time_scale: Option<i32>,
    pub time_offset: Option<i32>,
    pub pin: Option<String>,
}
