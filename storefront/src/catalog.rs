//! The static Cava de Oro product catalog.
//!
//! The storefront carries a fixed range of five tequilas. Catalog data is
//! bundled into the crate and never mutated at runtime; the cart snapshots
//! the fields it needs at add time.

use crate::money::Money;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Display language chosen by the buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// English storefront copy
    #[default]
    English,
    /// Simplified Chinese storefront copy
    Chinese,
}

/// Identifier for one of the five catalog products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductId {
    /// Tequila Añejo, aged two years
    Anejo,
    /// Tequila Extra Añejo, aged five years
    ExtraAnejo,
    /// Tequila Añejo Cristalino, charcoal filtered
    Cristalino,
    /// 20th-anniversary limited run
    BlackEdition,
    /// Tasting set of three 50ml bottles
    MiniCollection,
}

impl ProductId {
    /// The URL slug used by the storefront.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Anejo => "anejo",
            Self::ExtraAnejo => "extra-anejo",
            Self::Cristalino => "cristalino",
            Self::BlackEdition => "black-edition",
            Self::MiniCollection => "mini-collection",
        }
    }
}

/// One catalog entry with bilingual display copy and a fixed SGD price.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Stable identifier
    pub id: ProductId,
    /// English display name
    pub name: &'static str,
    /// Chinese display name
    pub name_zh: &'static str,
    /// Product photo URL
    pub image: &'static str,
    /// English description
    pub description: &'static str,
    /// Chinese description
    pub description_zh: &'static str,
    /// Alcohol by volume, as displayed
    pub alcohol_content: &'static str,
    /// English aging statement
    pub aging: &'static str,
    /// Chinese aging statement
    pub aging_zh: &'static str,
    /// Bottle volume, as displayed
    pub volume: &'static str,
    /// Mexican NOM distillery number
    pub nom: &'static str,
    /// English region of origin
    pub region: &'static str,
    /// Chinese region of origin
    pub region_zh: &'static str,
    /// English distillery name
    pub distillery: &'static str,
    /// Chinese distillery name
    pub distillery_zh: &'static str,
    /// English tasting notes
    pub tasting_notes: &'static [&'static str],
    /// Chinese tasting notes
    pub tasting_notes_zh: &'static [&'static str],
    /// English production details
    pub production_details: &'static str,
    /// Chinese production details
    pub production_details_zh: &'static str,
    /// Unit price in SGD
    pub price: Money,
}

impl Product {
    /// Display name in the given language.
    #[must_use]
    pub const fn localized_name(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.name,
            Language::Chinese => self.name_zh,
        }
    }

    /// Description in the given language.
    #[must_use]
    pub const fn localized_description(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.description,
            Language::Chinese => self.description_zh,
        }
    }
}

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product {
            id: ProductId::Anejo,
            name: "TEQUILA AÑEJO",
            name_zh: "陈酿龙舌兰酒",
            image: "https://ext.same-assets.com/297100652/2889512519.jpeg",
            description: "Aged for 2 years. Soft with notes of fruit and toasted barrel aromas. \
                          Fresh texture and a pleasant sweetness.",
            description_zh: "陈酿2年。柔和的水果香气和烘烤橡木桶香味。口感清新，带有怡人的甜味。",
            alcohol_content: "40%",
            aging: "Aged for 2 years",
            aging_zh: "陈酿2年",
            volume: "750ml",
            nom: "1477",
            region: "Los Altos de Jalisco",
            region_zh: "哈利斯科高地",
            distillery: "Tequilera Puerta de Hierro S.A de C.V",
            distillery_zh: "铁门龙舌兰酒厂有限公司",
            tasting_notes: &["Vanilla", "Caramel", "Oak", "Honey", "Spice"],
            tasting_notes_zh: &["香草", "焦糖", "橡木", "蜂蜜", "香料"],
            production_details: "Aged in American oak barrels for a minimum of 2 years. Made with \
                                 100% blue agave using traditional methods.",
            production_details_zh: "在美国橡木桶中陈酿至少2年。采用传统工艺，100%蓝色龙舌兰制作。",
            price: Money::new(dec!(150)),
        },
        Product {
            id: ProductId::ExtraAnejo,
            name: "TEQUILA EXTRA AÑEJO",
            name_zh: "特级陈酿龙舌兰酒",
            image: "https://ext.same-assets.com/297100652/3348755416.jpeg",
            description: "Aged for 5 years. With toasted barrel aromas. Full-bodied with notes of \
                          cassis and berries, exquisite vanilla and caramel sweetness.",
            description_zh: "陈酿5年。带有烘烤橡木桶香气。酒体饱满，带有黑醋栗和浆果香味，精致的香草和焦糖甜味。",
            alcohol_content: "40%",
            aging: "Aged for 5 years",
            aging_zh: "陈酿5年",
            volume: "750ml",
            nom: "1477",
            region: "Los Altos de Jalisco",
            region_zh: "哈利斯科高地",
            distillery: "Tequilera Puerta de Hierro S.A de C.V",
            distillery_zh: "铁门龙舌兰酒厂有限公司",
            tasting_notes: &[
                "Dark Chocolate",
                "Dried Fruits",
                "Leather",
                "Tobacco",
                "Premium Oak",
            ],
            tasting_notes_zh: &["黑巧克力", "干果", "皮革", "烟草", "优质橡木"],
            production_details: "Aged in French oak barrels for 5 years. Uses only the finest \
                                 quality agave, aged in specially selected barrels by master \
                                 distillers.",
            production_details_zh: "在法国橡木桶中陈酿5年。仅使用最优质的龙舌兰，由酿酒大师精选橡木桶陈酿。",
            price: Money::new(dec!(215)),
        },
        Product {
            id: ProductId::Cristalino,
            name: "TEQUILA AÑEJO CRISTALINO",
            name_zh: "陈酿水晶龙舌兰酒",
            image: "https://ext.same-assets.com/297100652/3761294050.jpeg",
            description: "Aged for 2 years/filtered 7 times. Fruity notes with smoky notes of \
                          roasted oak. Smooth taste creates a full-bodied, long aftertaste.",
            description_zh: "陈酿2年/7次过滤。带有水果香味和烘烤橡木的烟熏味。口感顺滑，酒体饱满，余味悠长。",
            alcohol_content: "40%",
            aging: "Aged for 2 years + Cristalino process",
            aging_zh: "陈酿2年 + 水晶工艺",
            volume: "750ml",
            nom: "1477",
            region: "Los Altos de Jalisco",
            region_zh: "哈利斯科高地",
            distillery: "Tequilera Puerta de Hierro S.A de C.V",
            distillery_zh: "铁门龙舌兰酒厂有限公司",
            tasting_notes: &["Fresh Agave", "Citrus", "Vanilla", "Mineral", "Smooth Finish"],
            tasting_notes_zh: &["新鲜龙舌兰", "柑橘", "香草", "矿物", "顺滑余味"],
            production_details: "After 2 years of aging, special activated carbon filtering \
                                 removes color while retaining the aged flavor profile.",
            production_details_zh: "经过2年陈酿后，特殊活性炭过滤去除色素，同时保留陈酿风味特征。",
            price: Money::new(dec!(645)),
        },
        Product {
            id: ProductId::BlackEdition,
            name: "BLACK EDITION",
            name_zh: "黑标限定版",
            image: "https://ext.same-assets.com/297100652/802937699.jpeg",
            description: "Rare Extra Añejo, limited to 1,000 bottles worldwide, created to \
                          commemorate the brand's 20th anniversary. Available exclusively in \
                          Singapore outside of Mexico.",
            description_zh: "稀有特级陈酿，全球限量1000瓶，为纪念品牌20周年而创制。除墨西哥外仅在新加坡独家发售。",
            alcohol_content: "40%",
            aging: "20+ years ultra-premium aging",
            aging_zh: "20年以上超高端陈酿",
            volume: "750ml",
            nom: "1477",
            region: "Los Altos de Jalisco",
            region_zh: "哈利斯科高地",
            distillery: "Tequilera Puerta de Hierro S.A de C.V",
            distillery_zh: "铁门龙舌兰酒厂有限公司",
            tasting_notes: &[
                "Rich Caramel",
                "Premium Chocolate",
                "Espresso",
                "Luxurious Oak",
                "Long Finish",
            ],
            tasting_notes_zh: &["浓郁焦糖", "顶级巧克力", "浓缩咖啡", "奢华橡木", "悠长余味"],
            production_details: "Limited to 1,000 bottles annually. Over 20 years of \
                                 ultra-premium aging creates the ultimate tequila experience \
                                 beyond conventional concepts.",
            production_details_zh: "年产限量1000瓶。超过20年的超高端陈酿，创造出超越传统概念的终极龙舌兰体验。",
            price: Money::new(dec!(1840)),
        },
        Product {
            id: ProductId::MiniCollection,
            name: "MINI BOTTLE COLLECTION",
            name_zh: "迷你酒瓶套装",
            image: "https://ext.same-assets.com/297100652/3519823886.jpeg",
            description: "An assortment of three popular varieties: Añejo, Extra Añejo, and \
                          Cristalino in 50ml bottles for tasting.",
            description_zh: "三种人气品种组合：陈酿、特级陈酿和水晶龙舌兰酒50ml装品鉴套装。",
            alcohol_content: "40%",
            aging: "Mixed aging (2yr/5yr/2yr Cristalino)",
            aging_zh: "混合陈酿（2年/5年/2年水晶）",
            volume: "50ml × 3 bottles",
            nom: "1477",
            region: "Los Altos de Jalisco",
            region_zh: "哈利斯科高地",
            distillery: "Tequilera Puerta de Hierro S.A de C.V",
            distillery_zh: "铁门龙舌兰酒厂有限公司",
            tasting_notes: &[
                "Distinctive flavors of each variety",
                "Perfect for tasting comparison",
                "Popular gift option",
            ],
            tasting_notes_zh: &["各品种独特风味", "品鉴比较完美选择", "热门礼品选择"],
            production_details: "Premium set featuring Cava de Oro's three signature varieties \
                                 in small portions. Perfect for tasting and gifts.",
            production_details_zh: "Cava de Oro三种招牌品种小包装高端套装。品鉴和送礼的完美选择。",
            price: Money::new(dec!(210)),
        },
    ]
});

/// All five catalog products in display order.
#[must_use]
pub fn products() -> &'static [Product] {
    &CATALOG
}

/// Look up a catalog entry by id.
///
/// The catalog always contains every `ProductId` variant.
#[must_use]
#[allow(clippy::missing_panics_doc)] // The catalog is total over ProductId
#[allow(clippy::expect_used)]
pub fn product(id: ProductId) -> &'static Product {
    CATALOG
        .iter()
        .find(|p| p.id == id)
        .expect("catalog covers every product id")
}
