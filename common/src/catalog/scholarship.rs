use serde::Serialize;

/// One scholarship entry in the "Top 10 Scholarships" article modal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Scholarship {
    pub name: &'static str,
    pub amount: &'static str,
    pub deadline: &'static str,
    pub eligibility: &'static str,
    pub coverage: &'static [&'static str],
    pub countries: &'static [&'static str],
    pub level: &'static str,
    pub competitiveness: &'static str,
    pub description: &'static str,
}

pub const SCHOLARSHIPS: &[Scholarship] = &[
    Scholarship {
        name: "Chevening Scholarships (UK)",
        amount: "Full tuition + living expenses",
        deadline: "November 2024",
        eligibility: "Outstanding academic record, leadership potential, work experience",
        coverage: &["Full tuition fees", "Monthly living allowance", "Return airfare", "Visa application costs"],
        countries: &["United Kingdom"],
        level: "Master's",
        competitiveness: "Very High",
        description: "The UK government's global scholarship programme, funded by the Foreign and Commonwealth Office and partner organisations.",
    },
    Scholarship {
        name: "Fulbright Foreign Student Program (USA)",
        amount: "$25,000 - $45,000 per year",
        deadline: "October 2024",
        eligibility: "Academic excellence, leadership experience, strong English proficiency",
        coverage: &["Tuition fees", "Living stipend", "Health insurance", "Round-trip travel"],
        countries: &["United States"],
        level: "Master's & PhD",
        competitiveness: "Very High",
        description: "Flagship international exchange program providing opportunities for students to undertake graduate study and research in the US.",
    },
    Scholarship {
        name: "Australia Awards Scholarships",
        amount: "Full tuition + AUD $3,000/month",
        deadline: "April 2024",
        eligibility: "From eligible developing countries, strong academic record, work experience",
        coverage: &["Full tuition fees", "Return air travel", "Establishment allowance", "Monthly contribution to living expenses"],
        countries: &["Australia"],
        level: "Bachelor's, Master's & PhD",
        competitiveness: "High",
        description: "Long-term development scholarships offered by the Australian Government to students from developing countries.",
    },
    Scholarship {
        name: "DAAD Scholarships (Germany)",
        amount: "€850 - €1,200 per month",
        deadline: "Various throughout the year",
        eligibility: "Academic excellence, relevant work experience, German language skills (for some programs)",
        coverage: &["Monthly stipend", "Health insurance", "Travel allowance", "Study and research allowance"],
        countries: &["Germany"],
        level: "Master's & PhD",
        competitiveness: "High",
        description: "German Academic Exchange Service offering scholarships for international students in various fields.",
    },
    Scholarship {
        name: "Erasmus Mundus Joint Master Degrees",
        amount: "€1,400 per month + tuition",
        deadline: "December 2023 - March 2024",
        eligibility: "Bachelor's degree, English proficiency, specific program requirements",
        coverage: &["Monthly living allowance", "Tuition fees", "Travel costs", "Insurance coverage"],
        countries: &["Multiple EU countries"],
        level: "Master's",
        competitiveness: "High",
        description: "Prestigious, integrated, international study programmes jointly delivered by consortia of higher education institutions.",
    },
    Scholarship {
        name: "Swiss Excellence Scholarships",
        amount: "CHF 1,920 per month + tuition",
        deadline: "December 2023",
        eligibility: "Outstanding academic record, research potential, under 35 years old",
        coverage: &["Monthly stipend", "Tuition fee waiver", "Health insurance", "Housing allowance"],
        countries: &["Switzerland"],
        level: "Master's & PhD",
        competitiveness: "Very High",
        description: "Research scholarships for foreign scholars who wish to pursue doctoral or post-doctoral research in Switzerland.",
    },
    Scholarship {
        name: "Canadian Government Scholarships",
        amount: "CAD $25,000 - $35,000",
        deadline: "February 2024",
        eligibility: "Academic excellence, research potential, language proficiency",
        coverage: &["Tuition fees", "Health insurance", "Monthly living allowance", "Research allowance"],
        countries: &["Canada"],
        level: "Master's & PhD",
        competitiveness: "High",
        description: "Various scholarship programs offered by the Canadian government to attract international students.",
    },
    Scholarship {
        name: "Japanese Government (MEXT) Scholarships",
        amount: "¥143,000 - ¥145,000 per month",
        deadline: "May - June 2024",
        eligibility: "Academic excellence, Japanese language proficiency (for some programs), under specific age limits",
        coverage: &["Monthly stipend", "Tuition fee exemption", "Round-trip airfare", "No tuition fees"],
        countries: &["Japan"],
        level: "Bachelor's, Master's & PhD",
        competitiveness: "High",
        description: "Scholarships offered by the Japanese Ministry of Education, Culture, Sports, Science and Technology.",
    },
    Scholarship {
        name: "New Zealand Development Scholarships",
        amount: "Full tuition + NZD $1,000/month",
        deadline: "March 2024",
        eligibility: "From eligible developing countries, development-related study goals, work experience",
        coverage: &["Full tuition fees", "Living allowance", "Return travel", "Health insurance"],
        countries: &["New Zealand"],
        level: "Bachelor's & Master's",
        competitiveness: "Medium-High",
        description: "Scholarships for students from developing countries to study in priority subject areas that support development outcomes.",
    },
    Scholarship {
        name: "Korean Government Scholarship Program (KGSP)",
        amount: "KRW 900,000 per month + tuition",
        deadline: "March 2024",
        eligibility: "Academic excellence, under 25 (undergraduate) or 40 (graduate), good health",
        coverage: &["Tuition fees", "Monthly living allowance", "Round-trip airfare", "Korean language course"],
        countries: &["South Korea"],
        level: "Bachelor's, Master's & PhD",
        competitiveness: "Medium-High",
        description: "Scholarships offered by the Korean government to promote international education exchange and mutual friendship.",
    },
];

pub const APPLICATION_TIPS: &[&str] = &[
    "Start your application process at least 12-18 months in advance",
    "Research thoroughly and apply to multiple scholarships to increase your chances",
    "Ensure your academic transcripts are translated and certified if required",
    "Write a compelling personal statement that aligns with the scholarship's objectives",
    "Obtain strong letters of recommendation from academic or professional references",
    "Prepare for potential interviews and language proficiency tests",
    "Keep track of all deadlines and requirements for each scholarship",
    "Consider working with education consultants for personalized guidance",
];
