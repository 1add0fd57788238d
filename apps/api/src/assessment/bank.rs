//! Static question banks and the skill-alias table.
//!
//! All tables here are fixed configuration data compiled into the binary.
//! The resolution functions are pure so they can be tested apart from the
//! table contents.

use crate::assessment::models::Question;

/// Case-insensitive, exact-match alias resolution to a canonical bank name.
/// Shared by the predefined bank and the curated video lookup. No fuzzy
/// matching: an unknown alias is simply unresolved.
pub fn resolve_alias(skill: &str) -> Option<&'static str> {
    match skill.to_lowercase().as_str() {
        "python" => Some("Python"),
        "javascript" | "js" => Some("JavaScript"),
        "react" | "reactjs" => Some("React"),
        "sql" | "mysql" | "postgresql" => Some("SQL"),
        _ => None,
    }
}

struct BankQuestion {
    id: &'static str,
    skill: &'static str,
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: &'static str,
    explanation: &'static str,
}

impl BankQuestion {
    fn to_question(&self) -> Question {
        Question {
            id: self.id.to_string(),
            skill: self.skill.to_string(),
            question: self.question.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: self.correct_answer.to_string(),
            explanation: self.explanation.to_string(),
        }
    }
}

/// Returns the fixed question set for a skill with a predefined bank entry,
/// after alias resolution. `None` means the provider should move on to the
/// generation tier.
pub fn predefined_questions(skill: &str) -> Option<Vec<Question>> {
    let bank = match resolve_alias(skill)? {
        "Python" => PYTHON_BANK,
        "JavaScript" => JAVASCRIPT_BANK,
        "React" => REACT_BANK,
        "SQL" => SQL_BANK,
        _ => return None,
    };
    Some(bank.iter().map(BankQuestion::to_question).collect())
}

const PYTHON_BANK: &[BankQuestion] = &[
    BankQuestion {
        id: "py_1",
        skill: "Python",
        question: "What is the correct way to create a list in Python?",
        options: ["[]", "()", "{}", "<>"],
        correct_answer: "[]",
        explanation: "Square brackets [] are used to create lists in Python",
    },
    BankQuestion {
        id: "py_2",
        skill: "Python",
        question: "Which method is used to add an element to a list?",
        options: ["add()", "append()", "insert()", "push()"],
        correct_answer: "append()",
        explanation: "append() adds an element to the end of a list",
    },
    BankQuestion {
        id: "py_3",
        skill: "Python",
        question: "What is the output of print(type([]))?",
        options: [
            "<class 'list'>",
            "<class 'array'>",
            "<class 'tuple'>",
            "<class 'set'>",
        ],
        correct_answer: "<class 'list'>",
        explanation: "[] creates a list object in Python",
    },
    BankQuestion {
        id: "py_4",
        skill: "Python",
        question: "How do you create a dictionary in Python?",
        options: ["{}", "[]", "()", "dict()"],
        correct_answer: "{}",
        explanation: "Curly braces {} are used to create dictionaries",
    },
    BankQuestion {
        id: "py_5",
        skill: "Python",
        question: "What is the correct way to define a function?",
        options: [
            "function name():",
            "def name():",
            "func name():",
            "define name():",
        ],
        correct_answer: "def name():",
        explanation: "def is the keyword to define functions in Python",
    },
];

const JAVASCRIPT_BANK: &[BankQuestion] = &[
    BankQuestion {
        id: "js_1",
        skill: "JavaScript",
        question: "How do you declare a variable in JavaScript?",
        options: ["var x = 5;", "variable x = 5;", "v x = 5;", "declare x = 5;"],
        correct_answer: "var x = 5;",
        explanation: "var is the traditional way to declare variables",
    },
    BankQuestion {
        id: "js_2",
        skill: "JavaScript",
        question: "What is the modern way to declare a constant?",
        options: ["const x = 5;", "constant x = 5;", "let x = 5;", "var x = 5;"],
        correct_answer: "const x = 5;",
        explanation: "const declares a constant that cannot be reassigned",
    },
    BankQuestion {
        id: "js_3",
        skill: "JavaScript",
        question: "Which method adds elements to the end of an array?",
        options: ["push()", "pop()", "shift()", "unshift()"],
        correct_answer: "push()",
        explanation: "push() adds elements to the end of an array",
    },
    BankQuestion {
        id: "js_4",
        skill: "JavaScript",
        question: "What is the output of typeof []?",
        options: ["array", "object", "list", "undefined"],
        correct_answer: "object",
        explanation: "Arrays are objects in JavaScript",
    },
    BankQuestion {
        id: "js_5",
        skill: "JavaScript",
        question: "How do you create an object in JavaScript?",
        options: ["{}", "[]", "()", "object()"],
        correct_answer: "{}",
        explanation: "Curly braces {} create object literals",
    },
];

const REACT_BANK: &[BankQuestion] = &[
    BankQuestion {
        id: "react_1",
        skill: "React",
        question: "Which hook is used to manage state in functional components?",
        options: ["useState", "useEffect", "useContext", "useReducer"],
        correct_answer: "useState",
        explanation: "useState is the primary hook for managing state",
    },
    BankQuestion {
        id: "react_2",
        skill: "React",
        question: "What is the correct way to create a React component?",
        options: [
            "function Component() {}",
            "class Component {}",
            "component Component() {}",
            "react Component() {}",
        ],
        correct_answer: "function Component() {}",
        explanation: "Functional components use function declarations",
    },
    BankQuestion {
        id: "react_3",
        skill: "React",
        question: "How do you pass data from parent to child component?",
        options: ["props", "state", "context", "refs"],
        correct_answer: "props",
        explanation: "Props are used to pass data down the component tree",
    },
    BankQuestion {
        id: "react_4",
        skill: "React",
        question: "Which lifecycle method runs after component mounts?",
        options: [
            "componentDidMount",
            "componentWillMount",
            "componentDidUpdate",
            "componentWillUnmount",
        ],
        correct_answer: "componentDidMount",
        explanation: "componentDidMount runs after the component is mounted",
    },
    BankQuestion {
        id: "react_5",
        skill: "React",
        question: "What is JSX?",
        options: [
            "JavaScript XML",
            "JavaScript Extension",
            "React Syntax",
            "HTML in JavaScript",
        ],
        correct_answer: "JavaScript XML",
        explanation: "JSX stands for JavaScript XML",
    },
];

const SQL_BANK: &[BankQuestion] = &[
    BankQuestion {
        id: "sql_1",
        skill: "SQL",
        question: "Which SQL command is used to retrieve data?",
        options: ["SELECT", "INSERT", "UPDATE", "DELETE"],
        correct_answer: "SELECT",
        explanation: "SELECT is used to retrieve data from tables",
    },
    BankQuestion {
        id: "sql_2",
        skill: "SQL",
        question: "What is the correct syntax for a basic SELECT statement?",
        options: [
            "SELECT * FROM table",
            "SELECT table FROM *",
            "FROM table SELECT *",
            "TABLE * FROM SELECT",
        ],
        correct_answer: "SELECT * FROM table",
        explanation: "SELECT * FROM table retrieves all columns from a table",
    },
    BankQuestion {
        id: "sql_3",
        skill: "SQL",
        question: "Which clause is used to filter results?",
        options: ["WHERE", "HAVING", "FILTER", "CONDITION"],
        correct_answer: "WHERE",
        explanation: "WHERE clause filters rows based on conditions",
    },
    BankQuestion {
        id: "sql_4",
        skill: "SQL",
        question: "How do you sort results in ascending order?",
        options: ["ORDER BY ASC", "ORDER BY", "SORT ASC", "ASC ORDER"],
        correct_answer: "ORDER BY",
        explanation: "ORDER BY sorts in ascending order by default",
    },
    BankQuestion {
        id: "sql_5",
        skill: "SQL",
        question: "Which keyword is used to join tables?",
        options: ["JOIN", "CONNECT", "LINK", "MERGE"],
        correct_answer: "JOIN",
        explanation: "JOIN is used to combine data from multiple tables",
    },
];

/// A per-skill seed question for the degraded structured-fallback tier.
pub struct SeedQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: &'static str,
    pub explanation: &'static str,
}

/// Seed questions for the structured fallback. Keyed by canonical skill name,
/// exact match only — no alias resolution on this path.
pub fn seed_question(skill: &str) -> Option<&'static SeedQuestion> {
    match skill {
        "JavaScript" => Some(&SEED_JAVASCRIPT),
        "Python" => Some(&SEED_PYTHON),
        "Java" => Some(&SEED_JAVA),
        "React" => Some(&SEED_REACT),
        "SQL" => Some(&SEED_SQL),
        _ => None,
    }
}

const SEED_JAVASCRIPT: SeedQuestion = SeedQuestion {
    question: "What is the correct way to declare a variable in JavaScript?",
    options: ["var x = 5;", "variable x = 5;", "v x = 5;", "declare x = 5;"],
    correct_answer: "var x = 5;",
    explanation: "var is the traditional way to declare variables in JavaScript",
};

const SEED_PYTHON: SeedQuestion = SeedQuestion {
    question: "Which of the following is used to create a list in Python?",
    options: ["[]", "()", "{}", "<>"],
    correct_answer: "[]",
    explanation: "Square brackets [] are used to create lists in Python",
};

const SEED_JAVA: SeedQuestion = SeedQuestion {
    question: "What is the main method signature in Java?",
    options: [
        "public static void main(String[] args)",
        "public void main(String[] args)",
        "static void main(String[] args)",
        "public static main(String[] args)",
    ],
    correct_answer: "public static void main(String[] args)",
    explanation: "The main method must be public, static, and return void",
};

const SEED_REACT: SeedQuestion = SeedQuestion {
    question: "What hook is used to manage state in functional components?",
    options: ["useState", "useEffect", "useContext", "useReducer"],
    correct_answer: "useState",
    explanation: "useState is the primary hook for managing state in functional components",
};

const SEED_SQL: SeedQuestion = SeedQuestion {
    question: "Which SQL command is used to retrieve data from a database?",
    options: ["SELECT", "INSERT", "UPDATE", "DELETE"],
    correct_answer: "SELECT",
    explanation: "SELECT is used to retrieve data from database tables",
};
