//! Constant page content. Everything here is rendered verbatim.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileInfo {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub website: &'static str,
}

pub const PROFILE: ProfileInfo = ProfileInfo {
    name: "Vivek Tawalare",
    email: "iamvivektawalare@gmail.com",
    phone: "+91 7276472228",
    github: "https://github.com/yourusername",
    linkedin: "https://linkedin.com/in/vivektawalare",
    website: "https://shorturl.at/fIxFs",
};

pub const HERO_TITLE: &str = "Data Science Portfolio";
pub const HERO_TAGLINE: &str = "Transforming Data into Insights | 2+ Years Experience";
pub const CONTACT_PITCH: &str = "Let's collaborate on your next data science project";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Comma-separated tool names.
    pub tools: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Sales Performance Analysis",
        description: "Analyzed sales data to identify key performance indicators (KPIs) and trends, leading to a 10% increase in sales.",
        tools: "Excel, Power BI, SQL, Data Governance, Data Quality",
    },
    Project {
        title: "Customer Segmentation Model",
        description: "Developed a machine learning model to segment customers, resulting in targeted marketing campaigns and a 15% increase in customer retention.",
        tools: "Python, Scikit-learn, Pandas, Matplotlib",
    },
    Project {
        title: "Predictive Maintenance System",
        description: "Created a predictive maintenance system for manufacturing equipment, reducing downtime by 25% and maintenance costs by 20%.",
        tools: "Python, TensorFlow, IoT sensors, Time Series Analysis",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Brain,
    BarChart,
    Database,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Brain => "🧠",
            Self::BarChart => "📊",
            Self::Database => "🗄",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub icon: SkillIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SKILLS: [Skill; 3] = [
    Skill {
        icon: SkillIcon::Brain,
        title: "Machine Learning",
        description: "Predictive Modeling, Deep Learning, NLP",
    },
    Skill {
        icon: SkillIcon::BarChart,
        title: "Data Visualization",
        description: "Power BI, Tableau, Matplotlib, Seaborn, Plotly",
    },
    Skill {
        icon: SkillIcon::Database,
        title: "Data Analysis",
        description: "Python, R, SQL, Excel, ETL, EDA",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillScore {
    pub label: &'static str,
    pub score: f64,
}

pub const SKILL_SERIES_NAME: &str = "skill level";
pub const SKILL_SCORE_MAX: f64 = 10.0;

pub static SKILL_SCORES: [SkillScore; 5] = [
    SkillScore { label: "Python", score: 8.0 },
    SkillScore { label: "R", score: 7.0 },
    SkillScore { label: "SQL", score: 9.0 },
    SkillScore { label: "Machine Learning", score: 8.0 },
    SkillScore { label: "Data Viz", score: 9.0 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

impl Experience {
    pub fn heading(&self) -> String {
        format!("{} | {}", self.role, self.company)
    }
}

pub static EXPERIENCE: [Experience; 2] = [
    Experience {
        role: "Data Analyst",
        company: "INVESTWISELY",
        period: "March 2023 - Present (2+ Years)",
        highlights: &[
            "Conducted comprehensive data analyses on financial market trends",
            "Developed and maintained data models for market movement forecasting",
            "Created algorithms for risk assessment and market opportunity identification",
            "Improved forecasting accuracy and reduced financial risks",
        ],
    },
    Experience {
        role: "Intern",
        company: "AI Variant",
        period: "Sept 2022 - March 2023 (6 months)",
        highlights: &[
            "Developed a live video processing system for social distancing and person tracking",
            "Applied computer vision techniques for object detection and tracking",
            "Built and deployed SVMs and Linear Regression models for prediction tasks",
        ],
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// External profiles shown as hero buttons, in display order.
pub fn hero_links(profile: &ProfileInfo) -> [ProfileLink; 2] {
    [
        ProfileLink { label: "GitHub", href: profile.github },
        ProfileLink { label: "LinkedIn", href: profile.linkedin },
    ]
}

pub fn mail_href(profile: &ProfileInfo) -> String {
    format!("mailto:{}", profile.email)
}

pub fn tel_href(profile: &ProfileInfo) -> String {
    format!("tel:{}", profile.phone)
}

pub fn footer_notice(profile: &ProfileInfo, year: u32) -> String {
    format!("© {year} {}. All rights reserved.", profile.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_targets_pass_profile_values_through_verbatim() {
        assert_eq!(mail_href(&PROFILE), "mailto:iamvivektawalare@gmail.com");
        assert_eq!(tel_href(&PROFILE), "tel:+91 7276472228");

        let [github, linkedin] = hero_links(&PROFILE);
        assert_eq!(github.href, PROFILE.github);
        assert_eq!(linkedin.href, PROFILE.linkedin);
    }

    #[test]
    fn footer_names_the_owner_and_year() {
        assert_eq!(
            footer_notice(&PROFILE, 2026),
            "© 2026 Vivek Tawalare. All rights reserved."
        );
    }

    #[test]
    fn skill_scores_stay_on_the_chart_scale() {
        assert!(SKILL_SCORES
            .iter()
            .all(|entry| (0.0..=SKILL_SCORE_MAX).contains(&entry.score)));
    }

    #[test]
    fn experience_heading_joins_role_and_company() {
        assert_eq!(EXPERIENCE[0].heading(), "Data Analyst | INVESTWISELY");
        assert_eq!(EXPERIENCE[1].highlights.len(), 3);
    }
}
