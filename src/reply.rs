use std::fmt;

/// Which side of the assistant the person chatting is on. The active
/// role picks the message list and the reply wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Teacher,
    #[default]
    Student,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_lowercase().as_str() {
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        };
        write!(f, "{name}")
    }
}

/// Canned demo reply for a user message. Case-insensitive keyword
/// match, first hit wins; a real assistant backend would replace this.
pub fn demo_response(role: Role, message: &str) -> &'static str {
    let lower = message.to_lowercase();
    match role {
        Role::Teacher => {
            if lower.contains("lesson") || lower.contains("plan") {
                "I can help create a lesson plan! What subject and grade level are you teaching?"
            } else if lower.contains("assignment") || lower.contains("quiz") {
                "I'd be happy to help generate an assignment or quiz. What topic are you covering?"
            } else {
                "As your teaching assistant, I can help with lesson planning, content creation, \
                 assessment ideas, and teaching strategies. What specific area would you like \
                 assistance with?"
            }
        }
        Role::Student => {
            if lower.contains("career") || lower.contains("job") {
                "I'd be happy to provide career guidance! What subjects or activities do you \
                 enjoy the most?"
            } else if lower.contains("help") || lower.contains("understand") {
                "I can definitely help explain that concept. What specific part are you finding \
                 difficult?"
            } else {
                "As your learning assistant, I can help with understanding concepts, provide \
                 study tips, or discuss career paths. What would you like to know more about?"
            }
        }
    }
}
