use crate::dismissal_table;

pub const BATSMEN: &[&str] = &[
    "MS Dhoni", "RG Sharma", "AB de Villiers", "YK Pathan",
    "Ch Gayle", "S Dhawan", "SK Raina", "KD Karthik",
    "MK Pandey", "DA Warner", "V Kohli", "AM Rahane",
    "V Sehwag", "G Gambhir", "RV Uthappa", "PA Patel",
    "BB McCullum",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Batsman,
    Bowler,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "bat" | "batsman" | "batsmen" => Some(Role::Batsman),
            "bowl" | "bowler" | "bowlers" => Some(Role::Bowler),
            _ => None,
        }
    }
}

pub fn names(role: Role) -> Vec<&'static str> {
    match role {
        Role::Batsman => BATSMEN.to_vec(),
        Role::Bowler => dismissal_table::bowlers().collect(),
    }
}

/// 1-based pick from the roster, as numbered by `roster` listings.
pub fn pick(role: Role, number: usize) -> Option<&'static str> {
    let index = number.checked_sub(1)?;
    names(role).get(index).copied()
}

pub fn search(role: Role, query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    names(role)
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .collect()
}

/// Maps each word of recognized sheet text to the first roster name that
/// contains it or is contained by it, ignoring case. Keeps the first
/// occurrence of each name, in text order.
pub fn match_words(role: Role, text: &str) -> Vec<&'static str> {
    let roster = names(role)
        .into_iter()
        .map(|name| (name, name.to_lowercase()))
        .collect::<Vec<_>>();
    let mut matched = Vec::new();
    for word in text.split_whitespace() {
        let word = word.to_lowercase();
        let hit = roster
            .iter()
            .find(|(_, lower)| lower.contains(&word) || word.contains(lower.as_str()));
        if let Some((name, _)) = hit {
            if !matched.contains(name) {
                matched.push(*name);
            }
        }
    }
    matched
}
