use strum::{AsRefStr, Display};

pub const COMPANY_NAME: &str = "Jambo Agri Ltd.";
pub const SHORT_NAME: &str = "Jambo Agri";
pub const TAGLINE: &str = "Empowering small-scale farmers in Kirinyaga and beyond with superior tissue culture planting materials.";

/// Icon ids in `static/icons.svg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    CheckCircle,
    Users,
    Layers,
    Sprout,
    MapPin,
    Target,
    Lightbulb,
    Phone,
    Mail,
    Clock,
    Leaf,
    ArrowRight,
    Check,
}

/// Card with an icon, a title and a short text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Home page highlights.
pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::CheckCircle,
        title: "Premium Quality",
        description: "Disease-free, high-yielding tissue culture plants rigorously tested for genetic purity.",
    },
    Feature {
        icon: Icon::Users,
        title: "Farmer-Centric",
        description: "Tailored solutions and hands-on support specifically designed for small-scale farmers.",
    },
    Feature {
        icon: Icon::Layers,
        title: "Wide Variety",
        description: "Specializing in Bananas, Potatoes, Pineapples, and other high-value crops.",
    },
    Feature {
        icon: Icon::Sprout,
        title: "Expert Support",
        description: "From our lab to your field, we provide agronomic guidance every step of the way.",
    },
];

/// "Why choose us" cards on the about page.
pub const HIGHLIGHTS: &[Feature] = &[
    Feature {
        icon: Icon::MapPin,
        title: "Local Presence",
        description: "We are based in Mwea, Kirinyaga County. We understand your soil, your climate, and your challenges.",
    },
    Feature {
        icon: Icon::Sprout,
        title: "Uncompromising Quality",
        description: "Our tissue culture process ensures every plant is genetically uniform, free from pests and diseases, and has a vigorous growth potential.",
    },
    Feature {
        icon: Icon::Lightbulb,
        title: "Farmer Education",
        description: "We believe in knowledge transfer. We offer guidance on best agronomic practices to ensure you get the most from our plants.",
    },
];

pub const MISSION: Feature = Feature {
    icon: Icon::Target,
    title: "Our Mission",
    description: "To empower small-scale farmers in Kirinyaga County and beyond by providing access to affordable, high-quality tissue culture plants, driving agricultural productivity and sustainable livelihoods.",
};

pub const VISION: Feature = Feature {
    icon: Icon::Lightbulb,
    title: "Our Vision",
    description: "To be the leading provider of trusted planting solutions in Kenya, known for our quality, integrity, and unwavering commitment to farmer success.",
};

pub const JOURNEY: &[&str] = &[
    "Jambo Agri Ltd. was established in May 2025 with a clear goal: to address the challenges faced by local farmers. We saw the struggle with low-yielding, disease-prone planting materials and knew there was a better way.",
    "By harnessing tissue culture technology, we provide a solid foundation for a more prosperous and food-secure community. We are not just a business; we are a solution born from the soil of Kirinyaga.",
];

pub const INTRO: &str = "Established in the heart of Kirinyaga's agricultural hub in May 2025, we are dedicated to empowering local farmers. We specialize in producing superior, disease-free planting materials using state-of-the-art tissue culture technology. Based in Mwea, we are your neighbors, and we are committed to your growth.";

/// How to reach the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub address: &'static [&'static str],
    pub phone: &'static str,
    pub hours: &'static str,
    pub email: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    address: &["Mwea, Kirinyaga County", "Kenya"],
    phone: "+254 700 000 000",
    hours: "Mon-Fri, 8am - 5pm",
    email: "info@jamboagri.co.ke",
};

impl ContactDetails {
    /// Phone number usable in a `tel:` link.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Compared against the page's `current_path` to mark the active link.
    pub key: &'static str,
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        key: "home",
        name: "Home",
        href: "/",
    },
    NavLink {
        key: "about",
        name: "About Us",
        href: "/about",
    },
    NavLink {
        key: "crops",
        name: "Our Crops",
        href: "/crops",
    },
    NavLink {
        key: "contact",
        name: "Contact",
        href: "/contact",
    },
];
