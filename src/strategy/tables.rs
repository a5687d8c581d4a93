//! Constant template tables for the synthesizer.
//!
//! Placeholders: `{intent}`, `{category}`, `{industry}`, `{audience}`.

use super::{Audience, Category};

const GAMING_HOOKS: &[&str] = &[
    "Stop scrolling! This {industry} trick just carried my whole squad...",
    "POV: You finally found the {category} setting pros never talk about...",
    "Why is nobody talking about this {industry} strategy?",
    "I tried {intent} for 30 days and my rank exploded...",
    "{audience}, you have been playing {industry} wrong this entire time.",
];

const FITNESS_HOOKS: &[&str] = &[
    "Stop scrolling! This {category} secret will change your next workout...",
    "POV: You discover {intent} and your energy never crashes again...",
    "Trainers hate this simple {category} switch...",
    "I tried {intent} for 30 days and here's what happened...",
    "If you are one of the {audience} skipping this, watch till the end.",
];

const LIFESTYLE_HOOKS: &[&str] = &[
    "This tiny {category} habit quietly changed my whole routine...",
    "POV: Your mornings after you try {intent}...",
    "Nobody warned me {intent} would feel this good.",
    "Three {category} upgrades every one of the {audience} needs this year.",
];

const BUSINESS_HOOKS: &[&str] = &[
    "This {category} move doubled my output in a week...",
    "Why is nobody talking about {intent}?",
    "POV: You stop guessing and start using {intent}...",
    "The {industry} playbook that {audience} keep getting wrong.",
];

const PRODUCT_HOOKS: &[&str] = &[
    "I did not expect {intent} to actually work...",
    "Stop scrolling! This {category} drop is not what you think...",
    "Honest review: {intent} after 30 days.",
    "The {category} every one of the {audience} keeps asking me about.",
];

const GENERIC_HOOKS: &[&str] = &[
    "Stop scrolling! This {category} secret will blow your mind...",
    "POV: You're about to discover the {category} hack everyone's hiding...",
    "Why is nobody talking about this {category} strategy?",
    "I tried this {category} method for 30 days and here's what happened...",
];

pub(crate) fn hook_templates(category: &Category) -> &'static [&'static str] {
    match category {
        Category::Gaming => GAMING_HOOKS,
        Category::Fitness => FITNESS_HOOKS,
        Category::Lifestyle => LIFESTYLE_HOOKS,
        Category::Business => BUSINESS_HOOKS,
        Category::Product => PRODUCT_HOOKS,
        Category::Other(_) => GENERIC_HOOKS,
    }
}

pub(crate) const TRENDING_HASHTAGS: &[&str] = &[
    "#fyp",
    "#foryou",
    "#viral",
    "#trending",
    "#foryoupage",
    "#tiktok",
];

const GAMING_HASHTAGS: &[&str] = &[
    "#gaming",
    "#gamer",
    "#gamingtips",
    "#ranked",
    "#gamingsetup",
    "#esports",
    "#twitch",
];

const FITNESS_HASHTAGS: &[&str] = &[
    "#fitness",
    "#gymtok",
    "#workout",
    "#preworkout",
    "#fitnessmotivation",
    "#healthylifestyle",
    "#energy",
];

const LIFESTYLE_HASHTAGS: &[&str] = &[
    "#lifestyle",
    "#dayinmylife",
    "#morningroutine",
    "#productivity",
    "#selfcare",
    "#aesthetic",
];

const BUSINESS_HASHTAGS: &[&str] = &[
    "#business",
    "#entrepreneur",
    "#smallbusiness",
    "#sidehustle",
    "#marketing",
    "#startup",
];

const PRODUCT_HASHTAGS: &[&str] = &[
    "#productreview",
    "#tiktokmademebuyit",
    "#unboxing",
    "#musthave",
    "#honestreview",
    "#newproduct",
];

const GENERIC_HASHTAGS: &[&str] = &["#contentcreator", "#tips", "#howto", "#learnontiktok"];

pub(crate) fn category_hashtags(category: &Category) -> &'static [&'static str] {
    match category {
        Category::Gaming => GAMING_HASHTAGS,
        Category::Fitness => FITNESS_HASHTAGS,
        Category::Lifestyle => LIFESTYLE_HASHTAGS,
        Category::Business => BUSINESS_HASHTAGS,
        Category::Product => PRODUCT_HASHTAGS,
        Category::Other(_) => GENERIC_HASHTAGS,
    }
}

const GAMER_TACTICS: &[&str] = &[
    "Pin a comment asking viewers to drop their main and rank",
    "Reply to the best clip requests with a video response",
    "Go live right after posting to catch the comment wave",
    "Duet high-skill plays and break down what made them work",
];

const FITNESS_TACTICS: &[&str] = &[
    "Challenge viewers to try the routine and stitch their results",
    "Answer form questions with short follow-up clips",
    "Post a weekly progress check-in so followers come back",
];

const ENTREPRENEUR_TACTICS: &[&str] = &[
    "Ask viewers what their biggest bottleneck is this week",
    "Turn the top comment question into the next video",
    "Share a behind-the-numbers breakdown to build trust",
];

const STUDENT_TACTICS: &[&str] = &[
    "Ask which exam or deadline they are grinding for",
    "Post study-session sprints viewers can follow along with",
    "Reply to comments with quick focus tips before finals",
];

const GENERAL_TACTICS: &[&str] = &[
    "Ask an open question in the caption to spark replies",
    "Reply to early comments within the first hour",
    "Cross-post the hook to Reels and Shorts with a link back",
];

pub(crate) fn engagement_tactics(audience: &Audience) -> &'static [&'static str] {
    match audience {
        Audience::Gamers => GAMER_TACTICS,
        Audience::Fitness => FITNESS_TACTICS,
        Audience::Entrepreneurs => ENTREPRENEUR_TACTICS,
        Audience::Students => STUDENT_TACTICS,
        Audience::General | Audience::Other(_) => GENERAL_TACTICS,
    }
}

pub(crate) fn visual_strategy(category: &Category) -> &'static [&'static str] {
    match category {
        Category::Gaming => &[
            "Camera: face-cam in the corner over full-screen gameplay",
            "Transitions: hard cut on every kill or clutch moment",
            "Text overlays: rank badge and one-line tip per play",
            "Setting: RGB-lit desk with the energy can in frame",
        ],
        Category::Fitness => &[
            "Camera: low side angle to show full range of motion",
            "Transitions: beat-synced cuts between sets",
            "Text overlays: reps, sets and rest times",
            "Setting: gym floor or bright home workout corner",
        ],
        Category::Lifestyle => &[
            "Camera: handheld POV shots through the routine",
            "Transitions: match cuts between morning and evening",
            "Text overlays: timestamps for each habit",
            "Setting: natural light, clean desk or kitchen",
        ],
        Category::Business => &[
            "Camera: direct-to-lens talking head, chest up",
            "Transitions: jump cuts to keep pace tight",
            "Text overlays: the key number or result on screen",
            "Setting: workspace with a whiteboard or laptop",
        ],
        Category::Product => &[
            "Camera: close-up macro shots of the product",
            "Transitions: whip pan into the reveal",
            "Text overlays: price and one standout feature",
            "Setting: clean surface with soft lighting",
        ],
        Category::Other(_) => &[
            "Camera: talking head with quick B-roll inserts",
            "Transitions: jump cuts every 2-3 seconds",
            "Text overlays: captions for every line",
            "Setting: well-lit, uncluttered background",
        ],
    }
}
