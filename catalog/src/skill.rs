#[derive(Clone, Debug, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillProficiency {
    pub name: &'static str,
    /// Percentage in [0, 100].
    pub percent: u8,
}

pub fn skill_categories() -> &'static [SkillCategory] {
    &CATEGORIES
}

pub fn proficiencies() -> &'static [SkillProficiency] {
    &PROFICIENCIES
}

static CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend",
        skills: &[
            "HTML5",
            "CSS3",
            "JavaScript",
            "React",
            "TypeScript",
            "Tailwind CSS",
            "Styled Components",
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            "Node.js",
            "Express.js",
            "Python",
            "Django",
            "REST APIs",
            "GraphQL",
            "JWT",
        ],
    },
    SkillCategory {
        title: "Database",
        skills: &[
            "MongoDB",
            "PostgreSQL",
            "MySQL",
            "Redis",
            "Firebase",
            "Prisma",
            "Mongoose",
        ],
    },
    SkillCategory {
        title: "Tools & Others",
        skills: &["Git", "Docker", "AWS", "Vercel", "Figma", "Postman", "VS Code"],
    },
];

static PROFICIENCIES: [SkillProficiency; 6] = [
    SkillProficiency { name: "React", percent: 90 },
    SkillProficiency { name: "Node.js", percent: 85 },
    SkillProficiency { name: "JavaScript", percent: 95 },
    SkillProficiency { name: "MongoDB", percent: 80 },
    SkillProficiency { name: "CSS/SCSS", percent: 88 },
    SkillProficiency { name: "TypeScript", percent: 75 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_populated() {
        assert_eq!(skill_categories().len(), 4);
        for category in skill_categories() {
            assert!(!category.skills.is_empty(), "{} is empty", category.title);
        }
    }

    #[test]
    fn proficiencies_in_range() {
        assert!(!proficiencies().is_empty());
        for skill in proficiencies() {
            assert!(skill.percent <= 100, "{} out of range", skill.name);
        }
    }
}
