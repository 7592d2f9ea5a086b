//! Seed content loaded into an empty store: the rotating message set and
//! the achievement list. All achievements start locked.

use mawadda_types::models::{Category, NewAchievement, NewMessage};

/// Achievement unlocked when the user authors their first custom message.
pub const FIRST_MESSAGE_ACHIEVEMENT: &str = "Beloved Wife";

pub fn messages() -> Vec<NewMessage> {
    let raw: [(&str, &str, Category, i64, bool); 10] = [
        (
            "Subhan Allah ✨",
            "Allah has blessed me with the most beautiful wife. Your faith and kindness illuminate our home like the light of guidance.",
            Category::Morning,
            12,
            false,
        ),
        (
            "Dua for My Beloved",
            "May Allah grant you happiness in both worlds and make you among the righteous. Your smile is a reflection of Allah's countless blessings upon us.",
            Category::Dua,
            15,
            true,
        ),
        (
            "Fi Amanillah",
            "When we are apart, I place you in Allah's protection. Distance cannot diminish the bond that Allah has created between our hearts.",
            Category::Missing,
            8,
            false,
        ),
        (
            "Alhamdulillahi Rabbil Alameen 💎",
            "All praise is due to Allah who blessed me with a wife who is my partner in this life and the next. You complete half of my deen.",
            Category::Gratitude,
            18,
            true,
        ),
        (
            "Barakallahu laki",
            "May Allah bless you, my dear wife. You are the coolness of my eyes and the tranquility of my heart, just as the Prophet ﷺ taught us.",
            Category::Blessing,
            12,
            false,
        ),
        (
            "Lailat Saeedah",
            "As you sleep tonight, I make dua that Allah grants you peaceful dreams and protection. You are my amanah from Allah.",
            Category::Goodnight,
            10,
            false,
        ),
        (
            "Always in My Dua 💕",
            "In every sujood, you are remembered. In every du'a, you are mentioned. May Allah keep us together in Jannah.",
            Category::Remembrance,
            14,
            false,
        ),
        (
            "Our Journey to Jannah",
            "Together we walk the path of righteousness. May Allah make our love a means of drawing closer to Him and earning His pleasure.",
            Category::Future,
            16,
            true,
        ),
        (
            "Mashallah Tabarakallah",
            "Allah has made you beautiful inside and out. Your taqwa and good character make you more precious than any treasure in this world.",
            Category::Appreciation,
            13,
            false,
        ),
        (
            "Bismillah",
            "With the name of Allah, we begin each day together. May He guide our steps and bless our marriage with His divine love.",
            Category::Morning,
            11,
            false,
        ),
    ];

    raw.into_iter()
        .map(|(title, content, category, hearts, is_special)| NewMessage {
            title: title.to_string(),
            content: content.to_string(),
            category,
            hearts,
            is_special,
        })
        .collect()
}

pub fn achievements() -> Vec<NewAchievement> {
    vec![
        NewAchievement {
            name: "First Prayer",
            description: "Made your first du'a together",
            icon: "🤲",
        },
        NewAchievement {
            name: "Heart Collector",
            description: "Collected 50+ hearts",
            icon: "💚",
        },
        NewAchievement {
            name: "Daily Dhikr",
            description: "Maintained a 7-day streak",
            icon: "📿",
        },
        NewAchievement {
            name: "Consistent Love",
            description: "Achieved a 14-day streak",
            icon: "🔥",
        },
        NewAchievement {
            name: "Devoted Heart",
            description: "Collected 200+ hearts",
            icon: "💖",
        },
        NewAchievement {
            name: "Love Champion",
            description: "Maintained an 18-day streak",
            icon: "🏆",
        },
        NewAchievement {
            name: "Faithful Companion",
            description: "Visit daily for 30 days",
            icon: "👑",
        },
        NewAchievement {
            name: FIRST_MESSAGE_ACHIEVEMENT,
            description: "Create your first love message",
            icon: "💕",
        },
    ]
}
