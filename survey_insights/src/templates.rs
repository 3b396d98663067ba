// The answer templates of each question: labels, how the values are derived
// from the city perturbation, and the sentences built from the final values.
//
// The labels, the formulas and the sentences are part of the published
// dataset. Do not reword them.

/// Everything needed to fill in the answers of one question.
pub(crate) struct QuestionTemplate {
    pub(crate) question_id: u32,
    pub(crate) labels: &'static [&'static str],
    /// Spread of the perturbation, centered on zero.
    pub(crate) range: i64,
    /// Computes the values from the perturbation.
    pub(crate) values: fn(i64) -> Vec<i64>,
    pub(crate) takeaways: fn(&[&str], &[i64]) -> Vec<String>,
    pub(crate) insights: fn(&[&str], &[i64]) -> String,
}

/// `floor(v / 2)`, also for negative values.
pub(crate) fn floor_half(v: i64) -> i64 {
    v.div_euclid(2)
}

/// `ceil(v / 2)`, also for negative values.
pub(crate) fn ceil_half(v: i64) -> i64 {
    -(-v).div_euclid(2)
}

pub(crate) fn template(question_id: u32) -> Option<&'static QuestionTemplate> {
    TEMPLATES.iter().find(|t| t.question_id == question_id)
}

pub(crate) static TEMPLATES: [QuestionTemplate; 14] = [
    QuestionTemplate {
        question_id: 1,
        labels: &["Bridal/Marriage", "Special Occasion", "Personal Use"],
        range: 10,
        values: |v| vec![45 + v, 30 - floor_half(v), 25 - ceil_half(v)],
        takeaways: |l, v| {
            vec![
                format!("{} is the Primary Driver: {}% of consumers purchase jewelry for bridal/marriage purposes, making it the leading motivation for high-value jewelry purchases.", l[0], v[0]),
                format!("Special Occasions Influence Purchases: {}% of consumers buy jewelry for special occasions such as weddings, anniversaries, or festivals, indicating the importance of seasonal marketing and event-based campaigns.", v[1]),
                format!("Personal Use Accounts for a Quarter of Purchases: {}% of consumers purchase jewelry for personal use, suggesting there is a market for premium self-gifting and personal milestone purchases.", v[2]),
            ]
        },
        insights: |_, v| {
            format!("The majority of high-value jewelry purchases are driven by bridal and marriage-related needs, accounting for {}% of the market. This highlights the importance of targeting wedding seasons and offering specialized bridal collections. Special occasions and personal use also contribute significantly, indicating diverse consumer motivations.", v[0])
        },
    },
    QuestionTemplate {
        question_id: 2,
        labels: &["22K Gold", "24K Gold", "18K Gold", "Platinum"],
        range: 8,
        values: |v| vec![50 + v, 30 - v, 15, 5],
        takeaways: |l, v| {
            vec![
                format!("{} is the most preferred, with {}% of consumers choosing it for its ideal balance of purity and value.", l[0], v[0]),
                format!("{}, the highest purity option, is chosen by {}% of consumers, indicating a strong preference for premium jewelry.", l[1], v[1]),
                format!("{} appeals to {}% of consumers, likely due to its durability and affordable pricing compared to higher purity options.", l[2], v[2]),
                format!("{} is less preferred, with only {}% choosing it, which highlights its appeal for luxury buyers seeking exclusive, durable jewelry.", l[3], v[3]),
            ]
        },
        insights: |l, v| {
            format!("Consumer preferences show a strong inclination towards {}, chosen by {}% of respondents. This reflects the balance between purity and value that most consumers seek. The premium {} segment, while smaller at {}%, represents an important luxury market segment.", l[0], v[0], l[1], v[1])
        },
    },
    QuestionTemplate {
        question_id: 3,
        labels: &[
            "Highly Influences",
            "Moderately Influences",
            "Doesn't Influence Much",
        ],
        range: 10,
        values: |v| vec![60 + v, 30 - floor_half(v), 10 - ceil_half(v)],
        takeaways: |_, v| {
            vec![
                format!("Strong Influence ({}%): Brand reputation strongly impacts high-value jewelry purchases. Brands should highlight their heritage, quality, and reputation in marketing.", v[0]),
                format!("Moderate Influence ({}%): Brand reputation plays a role, though not the top priority. Strong product guarantees and customer service can help build trust.", v[1]),
                format!("Minimal Influence ({}%): Brand reputation has little impact. Focus on design, price, and product features for this segment, offering personalized experiences or competitive pricing.", v[2]),
            ]
        },
        insights: |_, v| {
            format!("Brand reputation plays a crucial role in high-value jewelry purchases, with {}% of consumers indicating it highly influences their decisions. This underscores the importance of brand heritage, quality assurance, and reputation management in marketing strategies. Building and maintaining trust is essential for success in this market.", v[0])
        },
    },
    QuestionTemplate {
        question_id: 4,
        labels: &["Design", "Price", "Brand", "Sustainability/Materials"],
        range: 8,
        values: |v| vec![45 + v, 35 - v, 15, 5],
        takeaways: |l, v| {
            vec![
                format!("{} ({}%): The most important factor for special occasion jewelry. Brands should offer unique, stylish, and customized designs.", l[0], v[0]),
                format!("{} ({}%): A significant consideration for consumers, even for special events like weddings or anniversaries.", l[1], v[1]),
                format!("{} Reputation ({}%): Less influential for special occasion purchases, though still a factor.", l[2], v[2]),
                format!("{} ({}%): Minimal impact on decision-making, with eco-friendly options being secondary.", l[3], v[3]),
            ]
        },
        insights: |_, v| {
            format!("Design emerges as the dominant factor in special occasion jewelry selection, cited by {}% of consumers. This emphasizes the need for unique, aesthetically appealing, and customizable designs. Price remains important at {}%, suggesting that even for special occasions, value consideration is significant.", v[0], v[1])
        },
    },
    QuestionTemplate {
        question_id: 5,
        labels: &["Quarterly", "Semi-Annually", "Annually"],
        range: 10,
        values: |v| vec![30 + v, 40, 30 - v],
        takeaways: |_, v| {
            vec![
                format!("Semi-Annual Purchases ({}%): Consumers buy jewelry twice a year. Brands should target this group with seasonal campaigns and exclusive offers during mid-year and year-end sales.", v[1]),
                format!("Quarterly Purchases ({}%): Consumers buy jewelry frequently. Limited edition collections and exclusive designs can appeal to this group and drive repeat sales.", v[0]),
                format!("Annual Purchases ({}%): Consumers buy jewelry for special occasions. Brands can target this group with yearly collections or anniversary specials.", v[2]),
            ]
        },
        insights: |_, v| {
            format!("Consumer purchasing frequency is fairly distributed, with {}% buying semi-annually. This pattern suggests opportunities for strategic seasonal campaigns, new collection launches timed with peak buying periods, and loyalty programs to encourage more frequent purchases.", v[1])
        },
    },
    QuestionTemplate {
        question_id: 6,
        labels: &["In-store", "Online", "Both"],
        range: 8,
        values: |v| vec![40 + v, 50 - v, 10],
        takeaways: |_, v| {
            vec![
                format!("Online Shopping Preferred ({}%): Consumers prefer online shopping for its convenience and variety. Brands should enhance their online presence with a user-friendly website and features like virtual try-ons or 3D views.", v[1]),
                format!("In-store Shopping Popular ({}%): Many still prefer the in-store experience for tangible interaction. Brands should focus on premium in-store experiences with personalized service and product engagement.", v[0]),
                format!("Omnichannel Preference ({}%): Some consumers use both online and in-store channels. Brands should develop a seamless omnichannel strategy with online browsing and offline purchasing options like click-and-collect.", v[2]),
            ]
        },
        insights: |_, v| {
            format!("The jewelry market shows a clear shift towards digital channels, with {}% of consumers preferring online shopping. However, the {}% who prefer in-store experiences indicate the continued importance of physical retail. A hybrid omnichannel approach appears optimal for reaching the broadest consumer base.", v[1], v[0])
        },
    },
    QuestionTemplate {
        question_id: 7,
        labels: &[
            "Instagram/Facebook",
            "E-commerce Websites (Amazon, Flipkart)",
            "Brand Websites (Tanishq, etc.)",
        ],
        range: 10,
        values: |v| vec![55 + v, 30 - floor_half(v), 15 - ceil_half(v)],
        takeaways: |l, v| {
            vec![
                format!("{} Dominates ({}%): Consumers primarily use Instagram and Facebook for jewelry research and shopping. Brands should engage through high-quality images, influencer partnerships, and targeted ads to drive traffic and interest.", l[0], v[0]),
                format!("{} ({}%): Consumers also turn to platforms like Amazon and Flipkart for jewelry purchases. Listing on major e-commerce sites can expand reach and build trust with consumer reviews.", l[1], v[1]),
                format!("{} ({}%): A smaller segment relies on brand websites for research or shopping, indicating the continued relevance of brand loyalty and direct-to-consumer sales.", l[2], v[2]),
            ]
        },
        insights: |_, v| {
            format!("Social media platforms, particularly Instagram and Facebook, dominate as research and shopping tools, trusted by {}% of consumers. This digital-first behavior requires brands to maintain strong social media presence, invest in influencer marketing, and create shareable, visually appealing content.", v[0])
        },
    },
    QuestionTemplate {
        question_id: 8,
        labels: &["Stick to Known Brands", "Open to New Brands"],
        range: 10,
        values: |v| vec![60 + v, 40 - v],
        takeaways: |_, v| {
            vec![
                format!("Strong Preference for Well-known Brands ({}%): Consumers prioritize established brands due to reputation and trust. Maintaining brand strength is crucial for repeat purchases.", v[0]),
                format!("Openness to New Brands ({}%): Consumers are open to new brands, seeking unique designs, competitive pricing, or better service. This segment presents opportunities for innovation and differentiation.", v[1]),
            ]
        },
        insights: |_, v| {
            format!("Consumer brand loyalty remains strong, with {}% preferring established brands. However, the {}% openness to new brands suggests opportunities for emerging players who can differentiate through unique designs, competitive pricing, or superior customer experience.", v[0], v[1])
        },
    },
    QuestionTemplate {
        question_id: 9,
        labels: &["Very Much", "Somewhat", "Not Much"],
        range: 10,
        values: |v| vec![50 + v, 35 - floor_half(v), 15 - ceil_half(v)],
        takeaways: |_, v| {
            vec![
                format!("Strong Influence ({}%): Social media, especially Instagram and Facebook, heavily influences jewelry purchasing decisions. Brands should invest in targeted ads, organic posts, and influencer collaborations.", v[0]),
                format!("Moderate Impact ({}%): Social media somewhat impacts decisions, mainly through brand awareness and promotions. A broader marketing strategy with personalized offers should be used for this group.", v[1]),
                format!("Low Impact ({}%): Social media has little effect on decisions. This group values factors like brand reputation, price, and product features, so brands should focus on design, quality, and pricing for these consumers.", v[2]),
            ]
        },
        insights: |_, v| {
            format!("Social media significantly impacts jewelry purchasing decisions for {}% of consumers. This digital influence requires brands to integrate social commerce strategies, leverage user-generated content, and maintain active engagement with their online communities to drive purchase decisions.", v[0])
        },
    },
    QuestionTemplate {
        question_id: 10,
        labels: &[
            "Special Occasions Only (Weddings, Anniversaries, etc.)",
            "Quarterly",
            "Semi-Annually",
            "Annually",
        ],
        range: 6,
        values: |v| vec![15 + v, 20 - floor_half(v), 40, 25 - ceil_half(v)],
        takeaways: |_, v| {
            vec![
                format!("{}% of consumers buy jewelry semi-annually, showing a preference for regular but not overly frequent purchases.", v[2]),
                format!("{}% purchase jewelry annually, indicating more occasional spending.", v[3]),
                format!("{}% purchase quarterly, and {}% only for special occasions like weddings or anniversaries.", v[1], v[0]),
            ]
        },
        insights: |_, v| {
            format!("Purchase frequency analysis reveals that {}% of consumers buy jewelry semi-annually, representing the largest segment. Annual buyers at {}% and quarterly buyers at {}% indicate varied purchasing patterns. The {}% who buy only for special occasions suggest targeted event-based marketing can capture this segment effectively.", v[2], v[3], v[1], v[0])
        },
    },
    QuestionTemplate {
        question_id: 11,
        labels: &["Very Important", "Somewhat Important", "Not Important at All"],
        range: 8,
        values: |v| vec![50 + v, 40 - floor_half(v), 10 - ceil_half(v)],
        takeaways: |_, v| {
            vec![
                format!("{}% of consumers rate design as very important, making it the most influential factor in jewelry purchases.", v[0]),
                format!("{}% consider design to be somewhat important, reflecting that it plays a role but isn't the only factor.", v[1]),
                format!("{}% feel that design is not important in their decision-making process.", v[2]),
            ]
        },
        insights: |_, v| {
            format!("Design is the most critical factor in jewelry purchase decisions, with {}% rating it as very important. Combined with the {}% who find it somewhat important, design influences over {}% of all purchase decisions. Brands should prioritize innovative, aesthetically appealing designs and invest in design-led marketing to capture consumer attention.", v[0], v[1], v[0] + v[1])
        },
    },
    QuestionTemplate {
        question_id: 12,
        labels: &[
            "Yes, always",
            "Sometimes, depending on the occasion",
            "No, I prefer standard designs",
        ],
        range: 8,
        values: |v| vec![35 + v, 40 - floor_half(v), 25 - ceil_half(v)],
        takeaways: |_, v| {
            vec![
                format!("{}% of consumers prefer customization sometimes, depending on the occasion, showing flexibility in their preferences.", v[1]),
                format!("{}% always prefer customized designs, especially for special occasions.", v[0]),
                format!("{}% prefer standard designs, indicating a market for both custom and traditional options.", v[2]),
            ]
        },
        insights: |_, v| {
            format!("Customization preferences show a mixed market: {}% prefer customization sometimes depending on the occasion, while {}% always want personalized options. The {}% who prefer standard designs indicate that brands should offer both customizable and ready-made collections to cater to diverse preferences.", v[1], v[0], v[2])
        },
    },
    QuestionTemplate {
        question_id: 13,
        labels: &[
            "Weddings",
            "Anniversaries",
            "Festivals (Diwali, Christmas, etc.)",
            "Personal Milestones (e.g., promotion, achievement)",
        ],
        range: 8,
        values: |v| vec![50 + v, 30 - floor_half(v), 10, 10 - ceil_half(v)],
        takeaways: |_, v| {
            vec![
                format!("{}% of consumers purchase jewelry for weddings, making it the dominant occasion for high-value jewelry.", v[0]),
                format!("{}% purchase for anniversaries, highlighting the role of personal milestones.", v[1]),
                format!("{}% purchase for festivals, while another {}% purchase for personal achievements like promotions.", v[2], v[3]),
            ]
        },
        insights: |_, v| {
            format!("Weddings dominate jewelry purchase occasions at {}%, confirming the bridal segment as the primary market driver. Anniversaries account for {}%, while festivals and personal milestones contribute {}% and {}% respectively. Brands should align their collections and campaigns with these key occasions throughout the year.", v[0], v[1], v[2], v[3])
        },
    },
    QuestionTemplate {
        question_id: 14,
        labels: &["Very important", "Somewhat important", "Not important"],
        range: 8,
        values: |v| vec![55 + v, 35 - floor_half(v), 10 - ceil_half(v)],
        takeaways: |_, v| {
            vec![
                format!("{}% of consumers consider certification very important, indicating a strong demand for authenticity and trust.", v[0]),
                format!("{}% find certification somewhat important, suggesting that it is a secondary consideration.", v[1]),
                format!("{}% do not see certification as a priority, pointing to a smaller segment that may focus more on design or price.", v[2]),
            ]
        },
        insights: |_, v| {
            format!("Certification plays a significant role in purchase decisions, with {}% of consumers considering it very important. This highlights the growing consumer awareness about authenticity and quality standards like BIS hallmark. Brands that prominently display certifications and educate consumers about quality standards can build stronger trust and competitive advantage.", v[0])
        },
    },
];
