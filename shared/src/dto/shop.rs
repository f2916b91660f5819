use serde::{Deserialize, Serialize};

/// A vendor-supplied restaurant record.
///
/// Field names match the HotPepper gourmet API exactly so the record passes
/// through the gateway unchanged. Every field is defaulted because the vendor
/// omits fields it has no data for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Transit access description, mobile display variant.
    pub mobile_access: String,
    pub photo: ShopPhoto,
    pub genre: ShopGenre,
    pub budget: ShopBudget,
    /// Opening hours, free text.
    pub open: String,
    /// Regular closing days, free text.
    pub close: String,
    pub lat: f64,
    pub lng: f64,
    pub coupon_urls: CouponUrls,
    pub urls: ShopUrls,
    pub card: String,
    pub wifi: String,
    pub non_smoking: String,
    pub private_room: String,
    pub free_food: String,
    pub free_drink: String,
    pub parking: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShopPhoto {
    pub pc: PcPhoto,
    pub mobile: MobilePhoto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PcPhoto {
    pub l: String,
    pub m: String,
    pub s: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MobilePhoto {
    pub l: String,
    pub s: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShopGenre {
    pub name: String,
    pub code: String,
    pub catch: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShopBudget {
    pub average: String,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CouponUrls {
    pub pc: String,
    pub sp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShopUrls {
    pub pc: String,
}
