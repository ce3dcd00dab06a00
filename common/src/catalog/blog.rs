//! Blog catalog and search.
//!
//! Posts are authored in source with markdown bodies. Search is a
//! case-insensitive substring match of the term over title, excerpt, and
//! tags, ANDed with an exact category match; `"all"` matches every
//! category.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Markdown article body rendered in the reader modal.
    pub body: &'static str,
    pub category: &'static str,
    pub author: &'static str,
    pub publish_date: &'static str,
    pub read_time: &'static str,
    pub views: u32,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

/// Category filter options, `"all"` first.
pub const CATEGORIES: &[&str] = &[
    "all",
    "Study Destinations",
    "Test Preparation",
    "Scholarships",
    "Visa Guidance",
    "Finance & Budget",
    "Application Tips",
    "Career Guidance",
];

pub fn filter_posts(term: &str, category: &str) -> Vec<&'static BlogPost> {
    let needle = term.to_lowercase();
    POSTS
        .iter()
        .filter(|post| {
            let matches_search = post.title.to_lowercase().contains(&needle)
                || post.excerpt.to_lowercase().contains(&needle)
                || post.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
            let matches_category = category == "all" || post.category == category;
            matches_search && matches_category
        })
        .collect()
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Complete Guide to Studying in Malaysia 2025/26",
        excerpt: "Everything you need to know about studying in Malaysia, from university selection to visa requirements and living costs.",
        body: "## Why Choose Malaysia for Your Studies?\n\n\
               Malaysia has emerged as one of Asia's premier study destinations, offering world-class education at affordable costs. With over 150,000 international students, Malaysia provides a multicultural environment that prepares students for global careers.\n\n\
               ## Key Benefits of Studying in Malaysia\n\n\
               - **Affordable Education** — tuition fees starting from RM 15,000 per year, significantly lower than Western countries.\n\
               - **Quality Education** — universities ranked in QS World Rankings with international accreditation.\n\
               - **Strategic Location** — gateway to Asia with easy travel to neighboring countries and global connectivity.\n\
               - **Cultural Diversity** — multicultural society with English as the primary language of instruction.\n\n\
               ## Top Universities in Malaysia\n\n\
               - **INTI International University** (Subang Jaya, Selangor) — known for engineering and business programs with excellent job placement rates.\n\
               - **UCSI University** (Kuala Lumpur) — world-class facilities and a strong alumni network in creative industries.\n\
               - **Taylor's University** (Subang Jaya, Selangor) — premier destination for hospitality, business, and design studies in Asia.\n\
               - **MAHSA University** (Kuala Lumpur) — leading medical education with comprehensive healthcare programs.\n\
               - **SEGI University** (Kota Damansara, Selangor) — excellent value for money with strong industry connections.\n\
               - **City University Malaysia** (Petaling Jaya, Selangor) — growing reputation in technology and business education.\n\n\
               ## Visa Requirements\n\n\
               International students need a Student Pass issued through the Education Malaysia Global Services (EMGS) portal. Your chosen university handles the application once you accept an offer; allow six to eight weeks for processing.\n\n\
               ## Living Costs\n\n\
               Budget RM 1,500 to RM 2,500 per month covering accommodation, food, and transport — among the lowest of any major study destination.",
        category: "Study Destinations",
        author: "Taibul Islam Faisal",
        publish_date: "2024-01-15",
        read_time: "8 min read",
        views: 1250,
        image: "🇲🇾",
        tags: &["Malaysia", "Universities", "Visa", "Cost of Living"],
    },
    BlogPost {
        id: 2,
        title: "IELTS vs TOEFL: Which Test Should You Take?",
        excerpt: "Comprehensive comparison of IELTS and TOEFL tests to help you choose the right English proficiency exam.",
        body: "When applying to international universities, English proficiency tests are crucial. The two dominant options are IELTS and TOEFL, and the right choice depends on your destination and test-taking style.\n\n\
               ## Format\n\n\
               - **IELTS** — paper or computer based; the speaking section is a face-to-face interview with an examiner.\n\
               - **TOEFL** — fully computer based; speaking answers are recorded and scored later.\n\n\
               ## Where Each Is Preferred\n\n\
               IELTS is the default for the UK, Australia, and New Zealand; TOEFL remains the most widely recognized test for universities in the United States. Most institutions in Malaysia, Canada, and Europe accept both.\n\n\
               ## Choosing\n\n\
               Take a full-length practice test of each. Candidates who prefer conversing with a person usually score higher on IELTS; fast typists comfortable with American academic English often do better on TOEFL.",
        category: "Test Preparation",
        author: "Prof. Michael Chen",
        publish_date: "2024-01-12",
        read_time: "6 min read",
        views: 890,
        image: "📝",
        tags: &["IELTS", "TOEFL", "English Tests", "Preparation"],
    },
    BlogPost {
        id: 3,
        title: "Top 10 Scholarships for International Students 2024",
        excerpt: "Discover the best scholarship opportunities available for international students pursuing higher education abroad.",
        body: "Scholarships can significantly reduce the financial burden of studying abroad. This guide covers the ten most generous government and institutional programs open to international students this year.",
        category: "Scholarships",
        author: "Emma Wilson",
        publish_date: "2024-01-10",
        read_time: "10 min read",
        views: 2100,
        image: "🎓",
        tags: &["Scholarships", "Financial Aid", "Funding", "International Students"],
    },
    BlogPost {
        id: 4,
        title: "Student Visa Interview: Tips for Success",
        excerpt: "Expert tips and strategies to ace your student visa interview and increase your approval chances.",
        body: "The visa interview is a crucial step in your study abroad journey. Officers are looking for three things: genuine study intent, sufficient funds, and ties to your home country.\n\n\
               ## Before the Interview\n\n\
               - Organize admission letters, financial statements, and test scores in a single folder.\n\
               - Rehearse a one-minute answer to \"why this university and this program?\"\n\
               - Know your sponsor's occupation and income figures without checking documents.\n\n\
               ## During the Interview\n\n\
               Answer briefly and directly; volunteering unasked details invites follow-up questions. If you do not understand a question, ask the officer to repeat it rather than guessing.\n\n\
               ## Common Rejection Reasons\n\n\
               Vague post-graduation plans, inconsistent financial documents, and memorized-sounding answers account for most refusals. A refused application can be re-filed once the weakness is addressed.",
        category: "Visa Guidance",
        author: "James Rodriguez",
        publish_date: "2024-01-08",
        read_time: "7 min read",
        views: 1450,
        image: "🛂",
        tags: &["Visa Interview", "Student Visa", "Immigration", "Tips"],
    },
    BlogPost {
        id: 5,
        title: "Best Universities in Germany for Engineering",
        excerpt: "Explore top German universities offering world-class engineering programs with excellent career prospects.",
        body: "Germany is renowned for its engineering excellence and innovative technology. Public universities charge little or no tuition, and the industry ties of the Technische Universitäten translate into strong graduate employment.\n\n\
               ## Leading Institutions\n\n\
               - **TU Munich** — consistently top-ranked across mechanical and electrical engineering.\n\
               - **RWTH Aachen** — Europe's largest technical university with deep automotive industry links.\n\
               - **KIT Karlsruhe** — strength in computer science and energy systems.\n\n\
               ## Language and Admission\n\n\
               An increasing number of master's programs are taught in English, but bachelor's study usually requires German at B2/C1 level. Admission is grade-based through uni-assist for most international applicants.",
        category: "Study Destinations",
        author: "Dr. Klaus Mueller",
        publish_date: "2024-01-05",
        read_time: "9 min read",
        views: 980,
        image: "🇩🇪",
        tags: &["Germany", "Engineering", "Universities", "Technology"],
    },
    BlogPost {
        id: 6,
        title: "Cost of Living Guide: UK vs USA vs Canada",
        excerpt: "Detailed comparison of living costs in top study abroad destinations to help you budget effectively.",
        body: "Understanding the cost of living is crucial for international students. Tuition gets the attention, but day-to-day expenses decide whether a budget survives the first semester.\n\n\
               ## Monthly Estimates (single student, outside capital cities)\n\n\
               | Item | UK | USA | Canada |\n\
               |------|----|----|--------|\n\
               | Accommodation | £550 | $900 | CAD 800 |\n\
               | Food | £200 | $350 | CAD 300 |\n\
               | Transport | £60 | $80 | CAD 100 |\n\n\
               London, New York, and Toronto run 40-60% above these figures. All three countries allow part-time student work of roughly 20 hours per week, which typically covers food and transport but not rent.",
        category: "Finance & Budget",
        author: "Rachel Thompson",
        publish_date: "2024-01-03",
        read_time: "12 min read",
        views: 1780,
        image: "💰",
        tags: &["Cost of Living", "Budget", "UK", "USA", "Canada"],
    },
    BlogPost {
        id: 7,
        title: "How to Write a Winning Statement of Purpose",
        excerpt: "Step-by-step guide to crafting a compelling statement of purpose that gets you admitted to your dream university.",
        body: "Your statement of purpose is often the deciding factor in university admissions. Committees read thousands of them; the ones that stand out share a simple structure.\n\n\
               ## Structure That Works\n\n\
                1. A concrete opening moment that sparked your interest — never a famous quote.\n\
                2. Academic background, framed as preparation for this specific program.\n\
                3. Professional or project experience with measurable outcomes.\n\
               4. Why this university: name faculty, labs, or modules.\n\
               5. Career goal that the degree plausibly unlocks.\n\n\
               ## What to Cut\n\n\
               Childhood stories longer than two sentences, restated CV bullet points, and flattery about the university's ranking. Every paragraph must answer \"why should we admit you?\"",
        category: "Application Tips",
        author: "Dr. Lisa Anderson",
        publish_date: "2023-12-28",
        read_time: "11 min read",
        views: 2350,
        image: "✍️",
        tags: &["SOP", "Application", "Writing", "Admissions"],
    },
    BlogPost {
        id: 8,
        title: "Post-Study Work Opportunities in Australia",
        excerpt: "Complete guide to work rights and career opportunities for international students in Australia after graduation.",
        body: "Australia offers excellent post-study work opportunities for international graduates through the Temporary Graduate visa (subclass 485).\n\n\
               ## Work Rights by Qualification\n\n\
               - Bachelor's degree — two years of full work rights.\n\
               - Master's by coursework — two to three years.\n\
               - PhD — up to four years.\n\n\
               Regional campuses add an extra one to two years. Graduates in healthcare, engineering, and IT have the strongest pathways from the 485 visa to skilled permanent residency.",
        category: "Career Guidance",
        author: "David Kim",
        publish_date: "2023-12-25",
        read_time: "8 min read",
        views: 1120,
        image: "🇦🇺",
        tags: &["Australia", "Work Rights", "Career", "Post-Study"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_title_excerpt_and_tags_case_insensitively() {
        let results = filter_posts("malaysia", "all");
        assert!(!results.is_empty());
        for post in &results {
            let hit = post.title.to_lowercase().contains("malaysia")
                || post.excerpt.to_lowercase().contains("malaysia")
                || post.tags.iter().any(|t| t.to_lowercase().contains("malaysia"));
            assert!(hit, "{} should not match", post.title);
        }
    }

    #[test]
    fn unmatched_term_returns_an_empty_result_set() {
        assert!(filter_posts("quantum chromodynamics", "all").is_empty());
    }

    #[test]
    fn category_filter_is_exact_and_anded_with_the_term() {
        let results = filter_posts("", "Study Destinations");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|p| p.category == "Study Destinations"));

        // Term matches a post outside the category: the AND rejects it.
        assert!(filter_posts("IELTS", "Scholarships").is_empty());
    }

    #[test]
    fn empty_term_and_all_category_return_everything() {
        assert_eq!(filter_posts("", "all").len(), POSTS.len());
    }

    #[test]
    fn clearing_filters_restores_the_full_catalog() {
        // Mirrors the Clear Filters action: term -> "", category -> "all".
        assert!(filter_posts("nothing-matches-this", "Visa Guidance").is_empty());
        assert_eq!(filter_posts("", "all").len(), POSTS.len());
    }
}
