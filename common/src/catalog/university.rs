use serde::Serialize;

/// Card-level record for the universities grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct University {
    pub name: &'static str,
    pub location: &'static str,
    pub ranking: &'static str,
    pub students: &'static str,
    pub tuition_fee: &'static str,
    pub kind: &'static str,
    pub programs: &'static str,
    pub logo: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
}

/// Detail sheet shown in the university modal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct UniversityDetails {
    pub name: &'static str,
    pub overview: &'static str,
    pub highlights: &'static [&'static str],
    pub top_programs: &'static [Program],
    pub facilities: &'static [&'static str],
    pub scholarships: &'static [&'static str],
}

/// Detail sheet for `name`; unknown names fall back to the first sheet.
pub fn details_for(name: &str) -> &'static UniversityDetails {
    DETAILS.iter().find(|d| d.name == name).unwrap_or(&DETAILS[0])
}

pub const UNIVERSITIES: &[University] = &[
    University {
        name: "INTI International University",
        location: "Subang Jaya, Selangor",
        ranking: "Top 150 in Asia",
        students: "15,000+",
        tuition_fee: "RM 25,000 - RM 45,000/year",
        kind: "Private",
        programs: "80+ Programs",
        logo: "🏛️",
    },
    University {
        name: "UCSI University",
        location: "Kuala Lumpur",
        ranking: "Top 300 Worldwide",
        students: "12,000+",
        tuition_fee: "RM 30,000 - RM 55,000/year",
        kind: "Private",
        programs: "100+ Programs",
        logo: "🎓",
    },
    University {
        name: "Taylor's University",
        location: "Subang Jaya, Selangor",
        ranking: "Top 250 Worldwide",
        students: "20,000+",
        tuition_fee: "RM 35,000 - RM 60,000/year",
        kind: "Private",
        programs: "120+ Programs",
        logo: "📚",
    },
    University {
        name: "MAHSA University",
        location: "Kuala Lumpur",
        ranking: "Top 500 in Asia",
        students: "8,000+",
        tuition_fee: "RM 20,000 - RM 40,000/year",
        kind: "Private",
        programs: "60+ Programs",
        logo: "🏥",
    },
    University {
        name: "SEGI University",
        location: "Kota Damansara, Selangor",
        ranking: "Top 600 in Asia",
        students: "10,000+",
        tuition_fee: "RM 18,000 - RM 35,000/year",
        kind: "Private",
        programs: "70+ Programs",
        logo: "⚡",
    },
    University {
        name: "City University Malaysia",
        location: "Petaling Jaya, Selangor",
        ranking: "Emerging University",
        students: "5,000+",
        tuition_fee: "RM 15,000 - RM 30,000/year",
        kind: "Private",
        programs: "50+ Programs",
        logo: "🏢",
    },
];

const DETAILS: &[UniversityDetails] = &[
    UniversityDetails {
        name: "INTI International University",
        overview: "INTI International University is a leading private university in Malaysia, renowned for its strong industry partnerships and innovative curriculum. Established in 1986, INTI has built a reputation for producing graduates who are highly sought after by employers.",
        highlights: &[
            "Strong industry partnerships with multinational companies",
            "Modern campus facilities with state-of-the-art laboratories",
            "International curriculum aligned with global standards",
            "Excellent job placement rates (95%+ within 6 months)",
            "Dual degree programs with international universities",
        ],
        top_programs: &[
            Program { name: "Engineering", description: "Mechanical, Electrical, Civil, and Software Engineering programs" },
            Program { name: "Business", description: "MBA, Marketing, Finance, and International Business" },
            Program { name: "Information Technology", description: "Computer Science, Software Engineering, Cybersecurity" },
            Program { name: "Mass Communication", description: "Journalism, Public Relations, Digital Media" },
        ],
        facilities: &[
            "Advanced engineering laboratories",
            "Business simulation centers",
            "Modern library with digital resources",
            "Student accommodation on campus",
            "Sports and recreation facilities",
        ],
        scholarships: &[
            "Merit-based scholarships up to 100% tuition coverage",
            "Sports excellence scholarships",
            "International student bursaries",
            "Industry-sponsored scholarships",
        ],
    },
    UniversityDetails {
        name: "UCSI University",
        overview: "UCSI University is a top-tier private university known for its excellence in music, performing arts, and research programs. With a diverse student community from over 110 countries, UCSI provides a truly international learning environment.",
        highlights: &[
            "World-renowned music and performing arts programs",
            "Research-focused curriculum with strong publication record",
            "Diverse international student community (110+ countries)",
            "Industry partnerships with leading organizations",
            "Modern campus facilities and technology",
        ],
        top_programs: &[
            Program { name: "Music", description: "Classical, Contemporary, and Music Technology programs" },
            Program { name: "Medicine", description: "MBBS program with clinical training" },
            Program { name: "Engineering", description: "Chemical, Mechanical, and Electrical Engineering" },
            Program { name: "Hospitality Management", description: "International hospitality and tourism programs" },
        ],
        facilities: &[
            "Professional recording studios",
            "Concert halls and performance venues",
            "Medical simulation laboratories",
            "Research centers and libraries",
            "International student support services",
        ],
        scholarships: &[
            "Academic excellence scholarships",
            "Music and arts talent scholarships",
            "International student grants",
            "Research assistantship programs",
        ],
    },
    UniversityDetails {
        name: "Taylor's University",
        overview: "Taylor's University is a premier private university specializing in hospitality, business, and design. Known for its state-of-the-art facilities and industry-relevant curriculum, Taylor's prepares students for successful careers in their chosen fields.",
        highlights: &[
            "Leader in hospitality management education in Asia",
            "State-of-the-art facilities including award-winning campus",
            "Industry-relevant curriculum designed with employer input",
            "Strong alumni network in hospitality and business sectors",
            "International partnerships and exchange programs",
        ],
        top_programs: &[
            Program { name: "Hospitality Management", description: "International hospitality and culinary arts programs" },
            Program { name: "Business", description: "MBA, Finance, Marketing, and Entrepreneurship" },
            Program { name: "Design", description: "Interior Design, Architecture, and Creative Arts" },
            Program { name: "Communication", description: "Mass Communication and Digital Media" },
        ],
        facilities: &[
            "Award-winning lakeside campus",
            "Professional kitchens and restaurants",
            "Design studios and workshops",
            "Business simulation centers",
            "Student life and recreation facilities",
        ],
        scholarships: &[
            "Taylor's Excellence Scholarships",
            "Hospitality industry scholarships",
            "Creative arts scholarships",
            "International student support funds",
        ],
    },
    UniversityDetails {
        name: "MAHSA University",
        overview: "MAHSA University is a leading institution in medical and health sciences education. With modern medical facilities and comprehensive healthcare programs, MAHSA has established itself as a premier destination for aspiring healthcare professionals.",
        highlights: &[
            "Specialized focus on medical and health sciences",
            "Modern medical facilities and simulation laboratories",
            "Clinical training excellence with hospital partnerships",
            "Experienced faculty with medical expertise",
            "Research opportunities in healthcare fields",
        ],
        top_programs: &[
            Program { name: "Medicine", description: "MBBS program with comprehensive clinical training" },
            Program { name: "Dentistry", description: "Bachelor of Dental Surgery (BDS) program" },
            Program { name: "Pharmacy", description: "Bachelor of Pharmacy with research focus" },
            Program { name: "Nursing", description: "Bachelor of Nursing Science program" },
        ],
        facilities: &[
            "Medical simulation laboratories",
            "Dental clinics and training facilities",
            "Pharmacy laboratories",
            "Hospital partnerships for clinical training",
            "Research centers in medical sciences",
        ],
        scholarships: &[
            "Medical excellence scholarships",
            "Healthcare professional development grants",
            "International student bursaries",
            "Research scholarship programs",
        ],
    },
    UniversityDetails {
        name: "SEGI University",
        overview: "SEGI University offers quality education at affordable costs with flexible learning options. Known for its career-focused programs and strong industry connections, SEGI provides excellent value for money in higher education.",
        highlights: &[
            "Affordable quality education with flexible payment plans",
            "Flexible learning options including part-time programs",
            "Career-focused curriculum with practical training",
            "Strong industry connections and job placement support",
            "Modern facilities and technology integration",
        ],
        top_programs: &[
            Program { name: "Business", description: "Business Administration, Accounting, and Finance" },
            Program { name: "Information Technology", description: "Computer Science and Software Engineering" },
            Program { name: "Allied Health", description: "Physiotherapy, Occupational Therapy, and Optometry" },
            Program { name: "Early Childhood Education", description: "Education and child development programs" },
        ],
        facilities: &[
            "Modern computer laboratories",
            "Business training centers",
            "Allied health clinics",
            "Education practicum centers",
            "Student support services",
        ],
        scholarships: &[
            "Academic merit scholarships",
            "Financial need-based assistance",
            "Industry-sponsored programs",
            "Alumni support funds",
        ],
    },
    UniversityDetails {
        name: "City University Malaysia",
        overview: "City University Malaysia is an emerging institution with a focus on innovation in technology and business education. With small class sizes and personalized attention, City University provides a supportive learning environment for students.",
        highlights: &[
            "Innovation in technology and digital education",
            "Small class sizes ensuring personalized attention",
            "Modern facilities with latest technology",
            "Growing reputation in business and technology fields",
            "Strong industry partnerships and internship programs",
        ],
        top_programs: &[
            Program { name: "Information Technology", description: "Software Engineering, Data Science, and Cybersecurity" },
            Program { name: "Business", description: "Business Administration and Digital Marketing" },
            Program { name: "Architecture", description: "Architecture and Built Environment programs" },
            Program { name: "Psychology", description: "Applied Psychology and Counseling" },
        ],
        facilities: &[
            "Modern technology laboratories",
            "Innovation and entrepreneurship centers",
            "Architecture design studios",
            "Psychology counseling centers",
            "Student collaboration spaces",
        ],
        scholarships: &[
            "Technology innovation scholarships",
            "Entrepreneurship grants",
            "Academic performance awards",
            "Industry partnership scholarships",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_university_has_a_detail_sheet() {
        for university in UNIVERSITIES {
            assert_eq!(details_for(university.name).name, university.name);
        }
    }

    #[test]
    fn unknown_names_fall_back_to_the_first_sheet() {
        assert_eq!(details_for("Unknown College").name, DETAILS[0].name);
    }
}
