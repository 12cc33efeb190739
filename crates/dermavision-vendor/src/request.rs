use serde::{Deserialize, Serialize};

/// Body accepted by the relay from the web client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelayRequest {
    #[serde(rename = "imageDataUrl", default)]
    pub image_data_url: Option<String>,
    #[serde(rename = "imageBase64", default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub age: Option<serde_json::Number>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub body_part: Option<String>,
}

/// Body forwarded to the vendor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorRequest {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
}

impl RelayRequest {
    /// Pick the image payload and strip any data-URL prefix. `None` when
    /// neither image field carries data.
    pub fn into_vendor_request(self) -> Option<VendorRequest> {
        let image = [self.image_base64, self.image_data_url]
            .into_iter()
            .flatten()
            .map(|raw| strip_data_url_prefix(raw.trim()).to_string())
            .find(|image| !image.is_empty())?;

        Some(VendorRequest {
            image,
            age: self.age,
            sex: self.sex,
            body_part: self.body_part,
        })
    }
}

/// `data:image/png;base64,AAAA` → `AAAA`. Plain base64 is returned as is.
pub fn strip_data_url_prefix(image: &str) -> &str {
    if !image.starts_with("data:") {
        return image;
    }
    match image.split_once(";base64,") {
        Some((_, payload)) => payload,
        None => image,
    }
}
