//! Image display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_timestamp, truncate_string, yes_no};
use crate::client::models::Image;

const MAX_LINK_WIDTH: usize = 60;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ImageDisplay {
    #[tabled(rename = "IMAGE ID")]
    pub id: String,

    #[tabled(rename = "LINK")]
    pub link: String,

    #[tabled(rename = "PINNED")]
    pub pinned: String,

    #[tabled(rename = "POSTED")]
    pub posted: String,
}

impl From<Image> for ImageDisplay {
    fn from(image: Image) -> Self {
        Self {
            link: truncate_string(&image.image_link, MAX_LINK_WIDTH),
            pinned: yes_no(image.is_pinned),
            posted: format_timestamp(&image.created_at),
            id: image.id,
        }
    }
}
