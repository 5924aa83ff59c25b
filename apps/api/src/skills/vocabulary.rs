/// Recognized skill phrases. Fixed at build time, immutable for the process
/// lifetime. `Java` and `JavaScript` are distinct entries on purpose: the
/// matcher works on whole tokens, so neither partially matches the other.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "HTML",
    "CSS",
    "JS",
    "JavaScript",
    "Java",
    "C",
    "C++",
    "SQL",
    "PostgreSQL",
    "Machine Learning",
    "Django",
    "Flask",
    "React",
    "Node.js",
];
