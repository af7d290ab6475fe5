/// Location of the order service endpoints.
///
/// Headers and host are environment concerns handled by the transport;
/// the coordinator only needs the base path the two endpoints hang off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub base_path: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            base_path: String::from("/order-service/v1"),
        }
    }
}

impl ShopConfig {
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    #[must_use]
    pub fn items_path(&self) -> String {
        format!("{}/items", self.base_path)
    }

    #[must_use]
    pub fn purchase_path(&self) -> String {
        format!("{}/purchase", self.base_path)
    }
}
