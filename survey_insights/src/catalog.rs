//! Static tables of the survey: the questions, the cities and the months.
//!
//! Changing the survey (adding a city, a month or a question) means editing
//! these tables. Cities are listed in the order in which they were surveyed:
//! two per week, four weeks per month.

use crate::config::{ChartType, City, QuestionDefinition};

pub const CITIES_PER_WEEK: usize = 2;
pub const WEEKS_PER_MONTH: usize = 4;

pub const MONTH_NAMES: [&str; 3] = ["March", "April", "May"];

pub const QUESTIONS: [QuestionDefinition; 14] = [
    QuestionDefinition {
        question_id: 1,
        question_text: "What Motivates Your Decision To Purchase Jewelry Worth ₹50,000 Or More?",
        chart_type: ChartType::Pie,
    },
    QuestionDefinition {
        question_id: 2,
        question_text: "Which Type Of Purity Do You Mostly Prefer When Purchasing Jewelry?",
        chart_type: ChartType::Bar,
    },
    QuestionDefinition {
        question_id: 3,
        question_text: "How Much Does Brand Reputation Influence Your Decision When Purchasing High-value Jewelry?",
        chart_type: ChartType::HorizontalBar,
    },
    QuestionDefinition {
        question_id: 4,
        question_text: "What Factors Do You Consider When Selecting Jewelry For A Special Occasion, Such As A Wedding Or Anniversary?",
        chart_type: ChartType::Bar,
    },
    QuestionDefinition {
        question_id: 5,
        question_text: "How Often Do You Purchase Jewelry For Personal Use?",
        chart_type: ChartType::Bar,
    },
    QuestionDefinition {
        question_id: 6,
        question_text: "Do You Prefer Buying Jewelry Online Or In-store?",
        chart_type: ChartType::HorizontalBar,
    },
    QuestionDefinition {
        question_id: 7,
        question_text: "What Online Platforms Do You Rely On For Jewelry-related Research Or Shopping?",
        chart_type: ChartType::Bar,
    },
    QuestionDefinition {
        question_id: 8,
        question_text: "Do You Prefer To Shop For Jewelry From Well-known Brands Or Are You Open To Trying New Brands?",
        chart_type: ChartType::HorizontalBar,
    },
    QuestionDefinition {
        question_id: 9,
        question_text: "How Much Does Social Media (E.G., Instagram, Facebook) Impact Your Purchasing Decisions When It Comes To Jewelry?",
        chart_type: ChartType::Pie,
    },
    QuestionDefinition {
        question_id: 10,
        question_text: "How Often Do You Purchase Jewelry For Yourself Or As Gifts?",
        chart_type: ChartType::HorizontalBar,
    },
    QuestionDefinition {
        question_id: 11,
        question_text: "How Important Is The Design Of Jewelry In Your Purchase Decision?",
        chart_type: ChartType::Bar,
    },
    QuestionDefinition {
        question_id: 12,
        question_text: "When Purchasing Jewelry, Do You Prefer Customization Options Such As Personalized Engravings Or Custom Designs?",
        chart_type: ChartType::HorizontalBar,
    },
    QuestionDefinition {
        question_id: 13,
        question_text: "Which Type Of Jewelry Occasion Do You Purchase The Most For?",
        chart_type: ChartType::Pie,
    },
    QuestionDefinition {
        question_id: 14,
        question_text: "When Choosing Jewelry, How Important Is The Certification (E.G., BIS Hallmark, Authenticity Certificate)?",
        chart_type: ChartType::HorizontalBar,
    },
];

// (id, name, state)
const CITY_TABLE: [(&str, &str, &str); 24] = [
    // March
    ("mumbai-mar-w1", "Mumbai", "Maharashtra"),
    ("pune-mar-w1", "Pune", "Maharashtra"),
    ("ahmedabad-mar-w2", "Ahmedabad", "Gujarat"),
    ("surat-mar-w2", "Surat", "Gujarat"),
    ("jaipur-mar-w3", "Jaipur", "Rajasthan"),
    ("udaipur-mar-w3", "Udaipur", "Rajasthan"),
    ("bhubaneswar-mar-w4", "Bhubaneswar", "Odisha"),
    ("cuttack-mar-w4", "Cuttack", "Odisha"),
    // April
    ("kolkata-apr-w1", "Kolkata", "West Bengal"),
    ("siliguri-apr-w1", "Siliguri", "West Bengal"),
    ("lucknow-apr-w2", "Lucknow", "Uttar Pradesh"),
    ("prayagraj-apr-w2", "Prayagraj", "Uttar Pradesh"),
    ("patna-apr-w3", "Patna", "Bihar"),
    ("bhagalpur-apr-w3", "Bhagalpur", "Bihar"),
    ("chandigarh-apr-w4", "Chandigarh", "Chandigarh"),
    ("mohali-apr-w4", "Mohali", "Punjab"),
    // May
    ("hyderabad-may-w1", "Hyderabad", "Telangana"),
    ("visakhapatnam-may-w1", "Visakhapatnam", "Andhra Pradesh"),
    ("chennai-may-w2", "Chennai", "Tamil Nadu"),
    ("coimbatore-may-w2", "Coimbatore", "Tamil Nadu"),
    ("bengaluru-may-w3", "Bengaluru", "Karnataka"),
    ("mysuru-may-w3", "Mysuru", "Karnataka"),
    ("kochi-may-w4", "Kochi", "Kerala"),
    ("thiruvananthapuram-may-w4", "Thiruvananthapuram", "Kerala"),
];

/// All the surveyed cities, in survey order.
pub fn cities() -> Vec<City> {
    CITY_TABLE
        .iter()
        .map(|(id, name, state)| City {
            id: id.to_string(),
            name: name.to_string(),
            state: state.to_string(),
        })
        .collect()
}

/// The definition of a question, if it is part of the catalog.
pub fn question(question_id: u32) -> Option<&'static QuestionDefinition> {
    QUESTIONS.iter().find(|q| q.question_id == question_id)
}
