//! Site copy.

pub const SITE_NAME: &str = "Elysian House";
pub const TAGLINE: &str = "A quiet room for women who are ready to begin again.";
pub const INSTAGRAM_URL: &str = "https://instagram.com/elysianzita";

pub mod event {
    pub const NAME: &str = "Transform & Thrive";
    pub const SUBTITLE: &str = "A Gathering for Women Ready to Bloom";
    pub const DATE: &str = "February 28, 2026";
    pub const TIME: &str = "2:00 PM prompt";
    pub const LOCATION: &str = "Dubai";
    pub const VENUE: &str = "Millennium Airport Hotel";
    pub const PRICE: &str = "Complimentary";
}

pub mod home {
    pub const NARRATIVE: [&str; 3] = [
        "There's a season when everything works, but nothing fits anymore. When you're grateful and still hungry. When you're fine, and quietly disappearing.",
        "That restlessness isn't ingratitude. It's your next chapter trying to find you.",
        "You don't have to walk into it alone.",
    ];

    pub const INTRO_HEADLINE: &str = "Elysian House Event";
    pub const INTRO_DESCRIPTION: &str = "Not a seminar. Not a performance. A room. A gathering for women who are tired of carrying everything alone, and ready to be witnessed, held, and reminded of who they're becoming.";
    pub const INTRO_DATE: &str = "Feb 28 · Millennium Airport Hotel, Dubai";

    pub const ESSENCE_HEADLINE: &str = "What happens";
    pub const ESSENCE_ITEMS: [&str; 4] = [
        "We gather in a room designed for presence.",
        "We reflect, guided, not lectured.",
        "We witness each other, seen, not fixed.",
        "We leave different than we came.",
    ];

    pub const CTA_PRIMARY: &str = "Request Your Invitation";
    pub const CTA_SECONDARY: &str = "Learn more about the gathering";

    pub const CLOSING_HEADLINE: &str = "This is Elysian House";
    pub const CLOSING_TEXT: &str = "A place, a container, a recurring space women return to. This gathering is the first room. More will follow.";
}

pub mod gathering {
    pub const HEADLINE: &str = "The Gathering";
    pub const WHAT_IT_IS: &str = "Transform & Thrive is a curated, facilitated gathering, not a seminar, not a networking event, not a sales pitch. It's a room for women who are ready to step out of quiet survival and into intentional becoming. We come together to reflect, to witness, and to remember that we don't have to carry everything alone.";
    pub const AGENDA: [(&str, &str); 4] = [
        ("Opening & grounding", "We arrive. We land in our bodies. We leave the noise outside."),
        ("Guided reflection", "Facilitated prompts that invite you inward, not answers, but questions worth sitting with."),
        ("Witnessed conversation", "Small-group sharing. You speak. Others listen. No advice. Just presence."),
        ("Collective intention", "We close with something shared, a word, a breath, a quiet commitment to ourselves."),
    ];
    pub const WHO_FOR: &str = "This gathering is for women who feel the pull toward something more, even if they can't name it yet. Women whose lives look fine but feel different. Women who have been the strong one, the capable one, the one who holds it together. Women who are ready to be held, too.";
    pub const NOT_FOR: &str = "This is not for everyone. If you're looking for a quick fix, a motivational speech, or a room full of strangers exchanging business cards, this isn't it. This is slow. This is real. This is for women who are ready to show up.";
    pub const PARKING: &str = "Free parking";
    pub const DURATION: &str = "Half-day gathering";
    pub const NOTE: &str = "This is a curated gathering with limited capacity. Requests are reviewed to ensure the room is held with intention.";
}

pub mod about {
    pub const HEADLINE: &str = "The House";
    pub const PHILOSOPHY: [&str; 3] = [
        "Elysian House is not a brand in the traditional sense. It's a container, a symbolic house that women return to when they're ready to meet themselves again.",
        "We exist for the moment between who you've been and who you're becoming. That tender, uncertain season when life still looks fine on the outside, but something inside is asking for more truth.",
        "This is not coaching. Not wellness. Not another self-help promise. It's a space. A gathering. A room where you don't have to explain yourself, because the other women in it understand without words.",
    ];
    pub const HOST_BIO: &str = "The woman behind Elysian House is not a guru. She's a convener, someone who builds rooms and invites others in. Her role is to hold the space, not to fill it. She's walking this path too; she just decided to build the room along the way.";
    pub const VISION: &str = "This gathering is the first room of Elysian House. But it won't be the last. We envision quarterly gatherings, intimate dinners, longer retreats, and eventually, a community of women who return to each other, season after season.";
}

pub mod register {
    pub const HEADLINE: &str = "Request Your Invitation";
    pub const SUBTITLE: &str = "This is a curated gathering. We review each request to ensure the room is held with intention.";

    pub const NAME_LABEL: &str = "Full name";
    pub const NAME_PLACEHOLDER: &str = "Your name";
    pub const EMAIL_LABEL: &str = "Email";
    pub const EMAIL_PLACEHOLDER: &str = "your@email.com";
    pub const PHONE_LABEL: &str = "Phone number";
    pub const PHONE_PLACEHOLDER: &str = "+971 XX XXX XXXX";
    pub const HOPING_LABEL: &str = "What are you hoping to get out of this session?";
    pub const HOPING_PLACEHOLDER: &str = "Share your intentions for this gathering. (Optional)";
    pub const ANYTHING_LABEL: &str = "Anything you'd like us to know before we meet?";
    pub const ANYTHING_PLACEHOLDER: &str = "Any details that would help us prepare for you. (Optional)";
    pub const CONTACT_LABEL: &str = "How would you like to be contacted for more details?";
    pub const CONSENT_LABEL: &str = "I understand this is a half day, free in-person session and accept to be a part of.";

    pub const CONFIRMED_HEADLINE: &str = "We've received your request";
    pub const CONFIRMED_MESSAGE: &str = "Thank you for reaching out. We review each request personally, you'll hear from us soon.";
    pub const CONFIRMED_NEXT: &str = "In the meantime, feel free to follow along on Instagram for reflections and updates.";
}

pub mod privacy {
    pub const SECTIONS: [(&str, &str); 6] = [
        ("What we collect", "When you register for a gathering, we collect your name, email address, phone number, and any information you choose to share about what brings you to us."),
        ("How we use it", "Your information is used solely to communicate with you about gatherings you've registered for. We do not sell, rent, or share your personal information with third parties for marketing purposes."),
        ("Who has access", "Only the Elysian House team has access to your information. We use secure, trusted services to store and manage registrations."),
        ("Your choices", "If you'd like us to delete your information entirely, simply reach out and we'll take care of it."),
        ("Cookies", "We don't use cookies for advertising or tracking across other sites. Your theme preference (light/dark) is stored locally on your device."),
        ("Questions", "If you have questions about how we handle your information, please reach out."),
    ];
    pub const LAST_UPDATED: &str = "Last updated: January 2026";
}

pub mod footer {
    pub const PREFIX: &str = "Are you a woman, living in Dubai and ready to";
    pub const ROTATING_WORDS: [&str; 3] = ["start..", "scale..", "conquer.."];
    pub const TYPE_SPEED_MS: u32 = 80;
    pub const PAUSE_MS: u32 = 1_500;
}
