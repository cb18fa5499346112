//! The static catalogue of learning modules.
//! Every module carries its lesson text and a short multiple-choice quiz. Keeping the
//! catalogue data-driven means lessons can be added without touching the UI or the scoring.

use std::fmt;

/// High-level topic a learning module belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModuleCategory {
    EmailSecurity,
    AccountSecurity,
    Privacy,
    WebSecurity,
    NetworkSecurity,
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleCategory::EmailSecurity => write!(f, "Email Security"),
            ModuleCategory::AccountSecurity => write!(f, "Account Security"),
            ModuleCategory::Privacy => write!(f, "Privacy"),
            ModuleCategory::WebSecurity => write!(f, "Web Security"),
            ModuleCategory::NetworkSecurity => write!(f, "Network Security"),
        }
    }
}

/// One multiple-choice question. `correct_answer` indexes into `options`.
#[derive(Debug)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct_answer: usize,
}

/// A lesson and its quiz.
#[derive(Debug)]
pub struct LearningModule {
    /// Stable, machine-readable identifier used by progress records.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub category: ModuleCategory,
    /// Short icon name shown next to the title.
    pub icon: &'static str,
    pub quiz: &'static [QuizQuestion],
}

static MODULES: &[LearningModule] = &[
    LearningModule {
        id: "identifying-phishing",
        title: "Identifying Phishing Attacks",
        description: "Learn how to spot fake emails and websites designed to steal your information",
        content: "Phishing is a type of cyber attack where attackers impersonate legitimate organizations to steal sensitive information. Look for suspicious sender addresses, urgent language, spelling errors, and unusual requests for personal information.",
        category: ModuleCategory::EmailSecurity,
        icon: "Mail",
        quiz: &[
            QuizQuestion {
                question: "What is a common sign of a phishing email?",
                options: &[
                    "Urgent requests for personal information",
                    "Professional formatting",
                    "Company logo present",
                    "Addressed to you by name",
                ],
                correct_answer: 0,
            },
            QuizQuestion {
                question: "What should you do if you receive a suspicious email?",
                options: &[
                    "Click links to verify",
                    "Reply with your info",
                    "Report and delete it",
                    "Forward to friends",
                ],
                correct_answer: 2,
            },
        ],
    },
    LearningModule {
        id: "strong-passwords",
        title: "Creating Strong Passwords",
        description: "Master the art of creating and managing secure passwords",
        content: "A strong password should be at least 12 characters long and include uppercase letters, lowercase letters, numbers, and special symbols. Never reuse passwords across different accounts. Use a password manager to keep track of your passwords securely.",
        category: ModuleCategory::AccountSecurity,
        icon: "Lock",
        quiz: &[
            QuizQuestion {
                question: "What is the minimum recommended password length?",
                options: &["6 characters", "8 characters", "10 characters", "12 characters"],
                correct_answer: 3,
            },
            QuizQuestion {
                question: "Should you reuse passwords across different accounts?",
                options: &[
                    "Yes, for easy memory",
                    "No, never",
                    "Only for similar sites",
                    "Only for unimportant accounts",
                ],
                correct_answer: 1,
            },
        ],
    },
    LearningModule {
        id: "social-media-privacy",
        title: "Social Media Privacy",
        description: "Protect your personal information on social platforms",
        content: "Review your privacy settings regularly. Limit who can see your posts, personal information, and location. Be cautious about accepting friend requests from unknown people. Avoid sharing sensitive information like your address, phone number, or daily routines publicly.",
        category: ModuleCategory::Privacy,
        icon: "Users",
        quiz: &[
            QuizQuestion {
                question: "What information should you avoid sharing publicly on social media?",
                options: &[
                    "Your interests",
                    "Your home address",
                    "Your favorite movies",
                    "Your pet's name",
                ],
                correct_answer: 1,
            },
            QuizQuestion {
                question: "How often should you review your privacy settings?",
                options: &["Never", "Once a year", "Regularly", "Only when changing jobs"],
                correct_answer: 2,
            },
        ],
    },
    LearningModule {
        id: "two-factor-authentication",
        title: "Two-Factor Authentication",
        description: "Add an extra layer of security to your accounts",
        content: "Two-factor authentication (2FA) adds an extra security step when logging into your accounts. Even if someone steals your password, they won't be able to access your account without the second factor. Use authenticator apps rather than SMS when possible for better security.",
        category: ModuleCategory::AccountSecurity,
        icon: "Shield",
        quiz: &[
            QuizQuestion {
                question: "What does 2FA provide?",
                options: &[
                    "Faster login",
                    "Extra security layer",
                    "Better passwords",
                    "Free storage",
                ],
                correct_answer: 1,
            },
            QuizQuestion {
                question: "Which 2FA method is more secure?",
                options: &["SMS codes", "Authenticator apps", "Email codes", "Security questions"],
                correct_answer: 1,
            },
        ],
    },
    LearningModule {
        id: "safe-browsing",
        title: "Safe Browsing Habits",
        description: "Stay safe while surfing the web",
        content: "Always check for HTTPS in the URL before entering sensitive information. Be cautious of pop-ups and unexpected downloads. Keep your browser and plugins updated. Use ad blockers and anti-tracking extensions to enhance your privacy and security.",
        category: ModuleCategory::WebSecurity,
        icon: "Globe",
        quiz: &[
            QuizQuestion {
                question: "What does HTTPS indicate?",
                options: &["Fast website", "Secure connection", "Popular site", "Mobile friendly"],
                correct_answer: 1,
            },
            QuizQuestion {
                question: "Should you click on unexpected pop-ups?",
                options: &[
                    "Yes, always",
                    "Only from known sites",
                    "No, close them",
                    "Only on mobile",
                ],
                correct_answer: 2,
            },
        ],
    },
    LearningModule {
        id: "public-wifi",
        title: "Public Wi-Fi Security",
        description: "Protect yourself on public networks",
        content: "Public Wi-Fi networks are often unsecured and can be monitored by attackers. Avoid accessing sensitive accounts or making financial transactions on public Wi-Fi. Use a VPN (Virtual Private Network) to encrypt your connection when using public networks.",
        category: ModuleCategory::NetworkSecurity,
        icon: "Wifi",
        quiz: &[
            QuizQuestion {
                question: "What should you avoid on public Wi-Fi?",
                options: &["Reading news", "Checking weather", "Online banking", "Watching videos"],
                correct_answer: 2,
            },
            QuizQuestion {
                question: "What tool can help secure public Wi-Fi connections?",
                options: &["Antivirus", "VPN", "Firewall", "Ad blocker"],
                correct_answer: 1,
            },
        ],
    },
];

/// All learning modules, in presentation order.
pub fn all_modules() -> &'static [LearningModule] {
    MODULES
}

/// Looks up a module by id.
pub fn get_module(id: &str) -> Option<&'static LearningModule> {
    MODULES.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn module_ids_are_unique() {
        let ids: HashSet<_> = all_modules().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), all_modules().len());
    }

    #[test]
    fn every_answer_points_at_an_option() {
        for module in all_modules() {
            assert!(!module.quiz.is_empty(), "{} has no quiz", module.id);
            for q in module.quiz {
                assert!(q.correct_answer < q.options.len(), "{}: {}", module.id, q.question);
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(get_module("public-wifi").map(|m| m.title), Some("Public Wi-Fi Security"));
        assert!(get_module("does-not-exist").is_none());
    }

    #[test]
    fn every_module_has_an_icon() {
        let icons: Vec<_> = all_modules().iter().map(|m| m.icon).collect();
        assert_eq!(icons, ["Mail", "Lock", "Users", "Shield", "Globe", "Wifi"]);
    }
}
