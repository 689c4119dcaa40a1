use std::fmt;

/// A university entry: name, city and founding year
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct University {
    pub name: String,
    pub city: String,
    pub founded: i32,
}

impl University {
    pub fn new(name: impl Into<String>, city: impl Into<String>, founded: i32) -> Self {
        University {
            name: name.into(),
            city: city.into(),
            founded,
        }
    }

    /// The six universities used throughout the demonstrations, in insertion order
    pub fn sample() -> Vec<University> {
        [
            ("AGH", "Kraków", 1919),
            ("UJ", "Kraków", 1364),
            ("PW", "Warszawa", 1915),
            ("UW", "Warszawa", 1915),
            ("UP", "Poznań", 1919),
            ("PG", "Gdańsk", 1945),
        ]
        .into_iter()
        .map(University::from)
        .collect()
    }
}

impl From<(&str, &str, i32)> for University {
    fn from((name, city, founded): (&str, &str, i32)) -> Self {
        University::new(name, city, founded)
    }
}

impl fmt::Display for University {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.city, self.founded)
    }
}
