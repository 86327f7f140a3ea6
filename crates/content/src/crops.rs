/// A crop offered by the lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crop {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub varieties: &'static [&'static str],
    pub benefits: &'static [&'static str],
    /// Crops sharing a group are rendered as a single catalog entry.
    pub group: Option<&'static str>,
}

const BANANA_DESCRIPTION: &str = "Our tissue culture bananas are our flagship product, known for their rapid growth and disease resistance.";
const BANANA_VARIETIES: &[&str] = &["Grand Nain", "William", "FIA 17", "FHIA 18"];
const BANANA_BENEFITS: &[&str] = &[
    "Free from pests and diseases",
    "Uniform growth and maturity",
    "Higher yield per acre",
    "Early maturity compared to suckers",
];

pub const CROPS: &[Crop] = &[
    Crop {
        id: "bananas-1",
        name: "Tissue Culture Bananas",
        image: "/static/images/crops/banana-tree.svg",
        description: BANANA_DESCRIPTION,
        varieties: BANANA_VARIETIES,
        benefits: BANANA_BENEFITS,
        group: Some("bananas"),
    },
    Crop {
        id: "bananas-2",
        name: "Tissue Culture Bananas",
        image: "/static/images/crops/banana-seedling.svg",
        description: BANANA_DESCRIPTION,
        varieties: BANANA_VARIETIES,
        benefits: BANANA_BENEFITS,
        group: Some("bananas"),
    },
    Crop {
        id: "coffee",
        name: "Tissue Culture Coffee",
        image: "/static/images/crops/coffee.svg",
        description: "High-yielding and disease-resistant coffee plantlets ideal for both smallholder and commercial farmers.",
        varieties: &["SL28", "SL34", "Batian"],
        benefits: &[
            "Enhanced resistance to Coffee Leaf Rust",
            "Uniform plant size and growth",
            "Higher yield potential",
            "Improved cup quality",
        ],
        group: None,
    },
    Crop {
        id: "potatoes",
        name: "Certified Seed Potatoes",
        image: "/static/images/crops/potato.svg",
        description: "Clean, high-quality seed potatoes developed to resist bacterial wilt and viral infections common in the region.",
        varieties: &["Shangi", "Dutch Robjin", "Unica"],
        benefits: &[
            "Virus-free planting material",
            "High vigor and storability",
            "Excellent tuber formation",
            "Adaptable to various soil types",
        ],
        group: None,
    },
    Crop {
        id: "sweetpotatoes",
        name: "Sweet Potato Vines",
        image: "/static/images/crops/sweet-potato.svg",
        description: "Disease-free sweet potato vines that ensure healthy growth and high yields for food security and commercial purposes.",
        varieties: &["SPK 004", "Kemb 10"],
        benefits: &[
            "Free from Sweet Potato Virus Disease (SPVD)",
            "High yield potential",
            "Good storage roots quality",
            "Resistant to common pests",
        ],
        group: None,
    },
    Crop {
        id: "pineapples",
        name: "Elite Pineapples",
        image: "/static/images/crops/pineapple.svg",
        description: "Sweet, juicy, and uniform pineapple plantlets perfect for commercial farming.",
        varieties: &["Smooth Cayenne", "MD2"],
        benefits: &[
            "Uniform flowering and fruiting",
            "Sweet fruit with good shelf life",
            "Vigorous root system",
            "Reduced crop cycle time",
        ],
        group: None,
    },
    Crop {
        id: "cassava",
        name: "Improved Cassava",
        image: "/static/images/crops/cassava.svg",
        description: "Drought-tolerant and high-yielding cassava varieties, perfect for food security and industrial use.",
        varieties: &["Tajirika", "Kibandameno"],
        benefits: &[
            "High resistance to Cassava Mosaic Disease",
            "Early maturity (8-10 months)",
            "High starch content",
            "Excellent cooking quality",
        ],
        group: None,
    },
    Crop {
        id: "pyrethrum",
        name: "Pyrethrum Seedlings",
        image: "/static/images/crops/pyrethrum.svg",
        description: "High-pyrethrin content clones for the revival of the pyrethrum industry.",
        varieties: &["P4", "Ks/75/12"],
        benefits: &[
            "High flower yield per acre",
            "High pyrethrin content (>1.6%)",
            "Rapid establishment in the field",
            "Continuous flowering",
        ],
        group: None,
    },
    Crop {
        id: "roseflowers",
        name: "Tissue Culture Rose Flowers",
        image: "/static/images/crops/rose.svg",
        description: "Vibrant and healthy rose plants ideal for floriculture businesses and ornamental gardening.",
        varieties: &["Red Naomi", "Vendela", "Akito"],
        benefits: &[
            "Uniform flower size and color",
            "Long vase life",
            "Disease-free planting material",
            "Fast growth and blooming",
        ],
        group: None,
    },
];

/// One block on the crops page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub crop: &'static Crop,
    /// Images of every crop in the group, in catalog order.
    pub images: Vec<&'static str>,
    /// Image on the right, text on the left.
    pub reversed: bool,
}

impl CatalogEntry {
    pub fn is_gallery(&self) -> bool {
        self.images.len() > 1
    }

    /// Message used to prefill the contact form when ordering this crop.
    pub fn order_message(&self) -> String {
        format!("I would like to order {}.", self.crop.name)
    }
}

/// Crops page entries, with grouped crops collapsed onto their first member.
pub fn catalog() -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = Vec::with_capacity(CROPS.len());

    for crop in CROPS {
        let grouped = crop.group.and_then(|group| {
            entries
                .iter_mut()
                .find(|entry| entry.crop.group == Some(group))
        });

        if let Some(entry) = grouped {
            entry.images.push(crop.image);
            continue;
        }

        entries.push(CatalogEntry {
            crop,
            images: vec![crop.image],
            reversed: entries.len() % 2 == 1,
        });
    }

    entries
}

/// A crop tile on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showcase {
    pub name: &'static str,
    pub image: &'static str,
}

pub const HOME_SHOWCASE: &[Showcase] = &[
    Showcase {
        name: "Tissue Culture Bananas",
        image: "/static/images/crops/banana-tree.svg",
    },
    Showcase {
        name: "Certified Potatoes",
        image: "/static/images/crops/potato.svg",
    },
    Showcase {
        name: "Tissue Culture Coffee",
        image: "/static/images/crops/coffee.svg",
    },
];
