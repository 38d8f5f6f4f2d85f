//! Retailer lookup for scanned QR payloads.

/// Prefix of a retailer QR payload: `retailer:<Name>`.
pub const QR_PREFIX: &str = "retailer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retailer {
    pub name: String,
    pub discount: String,
    /// Candidate share images, in display order.
    pub images: Vec<String>,
}

/// Closed set of retailers a scan can resolve to.
pub trait RetailerCatalog: Send + Sync {
    /// Case-insensitive lookup by name.
    fn find(&self, name: &str) -> Option<Retailer>;

    /// Names in catalog order.
    fn names(&self) -> Vec<String>;
}

/// Extract the retailer name from a scanned payload.
///
/// The name is the second `:`-separated field; anything after a further
/// `:` is ignored. Payloads without a `:` have no name.
pub fn parse_payload(payload: &str) -> Option<&str> {
    payload.split(':').nth(1)
}

/// Build the payload a retailer's QR code encodes.
pub fn qr_payload(name: &str) -> String {
    format!("{}:{}", QR_PREFIX, name)
}

/// In-memory catalog. The default holds the four demo retailers.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    retailers: Vec<Retailer>,
}

impl StaticCatalog {
    pub fn new(retailers: Vec<Retailer>) -> Self {
        Self { retailers }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(vec![
            retailer(
                "Nike",
                "15% off your purchase",
                [
                    "https://images.unsplash.com/photo-1542291026-7eec264c27ff",
                    "https://images.unsplash.com/photo-1600185365926-3a2ce3cdb9eb",
                    "https://images.unsplash.com/photo-1556906781-9a412961c28c",
                ],
            ),
            retailer(
                "Adidas",
                "20% off your purchase",
                [
                    "https://images.unsplash.com/photo-1608231387042-66d1773070a5",
                    "https://images.unsplash.com/photo-1518002171953-a080ee817e1f",
                    "https://images.unsplash.com/photo-1539185441755-769473a23570",
                ],
            ),
            retailer(
                "Apple",
                "10% off accessories",
                [
                    "https://images.unsplash.com/photo-1611186871348-b1ce696e52c9",
                    "https://images.unsplash.com/photo-1592899677977-9c10ca588bbd",
                    "https://images.unsplash.com/photo-1585565804112-f201f68c48b4",
                ],
            ),
            retailer(
                "Amazon",
                "Free shipping on your next order",
                [
                    "https://images.unsplash.com/photo-1523474253046-8cd2748b5fd2",
                    "https://images.unsplash.com/photo-1605752540122-271ddb14b604",
                    "https://images.unsplash.com/photo-1620288627223-53302f4e8c74",
                ],
            ),
        ])
    }
}

impl RetailerCatalog for StaticCatalog {
    fn find(&self, name: &str) -> Option<Retailer> {
        let wanted = name.to_lowercase();
        self.retailers
            .iter()
            .find(|r| r.name.to_lowercase() == wanted)
            .cloned()
    }

    fn names(&self) -> Vec<String> {
        self.retailers.iter().map(|r| r.name.clone()).collect()
    }
}

fn retailer(name: &str, discount: &str, images: [&str; 3]) -> Retailer {
    Retailer {
        name: name.to_string(),
        discount: discount.to_string(),
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}
