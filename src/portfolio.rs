//! The fixed data shown on the page.

pub const PROFILE_PIC: &str = "/OIP-pixelized.png";
pub const SCAU_LOGO: &str = "/scau.png";
pub const UMICH_LOGO: &str = "/umich.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

impl Project {
    /// Display label for the card header, e.g. `ID:01`.
    pub fn id_label(&self) -> String {
        format!("ID:{:02}", self.id)
    }
}

/// Symbolic references into the small inline icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRef {
    BookOpen,
    Github,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    /// Literal text drawn in place of an icon.
    Glyph(&'static str),
    Symbol(IconRef),
}

/// Background/foreground tailwind classes for a deck card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColors {
    pub background: &'static str,
    pub foreground: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub colors: CardColors,
    pub icon: SocialIcon,
    pub url: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Institution {
    pub name: &'static str,
    pub short_name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "High-Freq Trading Engine",
        description: "A low-latency C++ engine for market making strategies. Includes order book reconstruction and execution optimization.",
        tags: &["C++", "Python", "Market Microstructure"],
        link: "#",
    },
    Project {
        id: 2,
        title: "Bayesian Option Pricing",
        description: "MCMC simulation framework for pricing exotic options with stochastic volatility models.",
        tags: &["R", "Statistics", "Monte Carlo"],
        link: "#",
    },
    Project {
        id: 3,
        title: "Alternative Data NLP",
        description: "Sentiment analysis pipeline using Transformers on financial news to predict short-term price movements.",
        tags: &["PyTorch", "NLP", "Time Series"],
        link: "#",
    },
    Project {
        id: 4,
        title: "Crypto Arbitrage Bot",
        description: "Real-time triangular arbitrage detection across decentralized exchanges on Ethereum.",
        tags: &["Solidity", "Rust", "DeFi"],
        link: "#",
    },
    Project {
        id: 5,
        title: "Portfolio Optimizer",
        description: "Mean-variance optimization tool using modern portfolio theory with constraints for transaction costs.",
        tags: &["Python", "Pandas", "Optimization"],
        link: "#",
    },
    Project {
        id: 6,
        title: "Volatility Surface Viz",
        description: "Interactive 3D visualization of implied volatility surfaces for major indices.",
        tags: &["D3.js", "React", "Finance"],
        link: "#",
    },
];

pub static SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "X",
        colors: CardColors {
            background: "bg-black",
            foreground: "text-white",
        },
        icon: SocialIcon::Glyph("X"),
        url: "https://x.com/000li718377",
        description: "Thoughts & Takes",
    },
    SocialLink {
        name: "Xiaohongshu",
        colors: CardColors {
            background: "bg-red-500",
            foreground: "text-white",
        },
        icon: SocialIcon::Glyph("RED"),
        url: "https://www.xiaohongshu.com",
        description: "Lifestyle & Notes",
    },
    SocialLink {
        name: "Zhihu",
        colors: CardColors {
            background: "bg-blue-500",
            foreground: "text-white",
        },
        icon: SocialIcon::Glyph("知"),
        url: "https://www.zhihu.com",
        description: "Q&A Community",
    },
    SocialLink {
        name: "Google Scholar",
        colors: CardColors {
            background: "bg-gray-100",
            foreground: "text-slate-900",
        },
        icon: SocialIcon::Symbol(IconRef::BookOpen),
        url: "https://scholar.google.com",
        description: "Academic Research",
    },
];

pub static EDUCATION: &[Institution] = &[
    Institution {
        name: "South China Agricultural University",
        short_name: "SCAU",
        url: "https://www.scau.edu.cn/",
        logo: SCAU_LOGO,
    },
    Institution {
        name: "University of Michigan",
        short_name: "UMich",
        url: "https://umich.edu/",
        logo: UMICH_LOGO,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_unique_and_positive() {
        assert_eq!(PROJECTS.len(), 6);
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        assert!(PROJECTS.iter().all(|p| p.id > 0));
    }

    #[test]
    fn test_social_names_unique() {
        assert_eq!(SOCIALS.len(), 4);
        let names: HashSet<_> = SOCIALS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SOCIALS.len());
    }

    #[test]
    fn test_id_label_zero_padded() {
        assert_eq!(PROJECTS[0].id_label(), "ID:01");
        let wide = Project {
            id: 12,
            ..PROJECTS[0].clone()
        };
        assert_eq!(wide.id_label(), "ID:12");
    }

    #[test]
    fn test_tag_order_preserved() {
        assert_eq!(PROJECTS[0].tags, &["C++", "Python", "Market Microstructure"]);
    }

    #[test]
    fn test_icon_variants() {
        assert_eq!(SOCIALS[2].icon, SocialIcon::Glyph("知"));
        assert_eq!(SOCIALS[3].icon, SocialIcon::Symbol(IconRef::BookOpen));
    }
}
