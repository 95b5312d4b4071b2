//! Bowler to dismissed-batsmen lookup. Fixed at build time.

pub type DismissalEntry = (&'static str, &'static [&'static str]);

pub const DISMISSALS: &[DismissalEntry] = &[
    ("Sandeep", &["MS Dhoni", "RG Sharma", "AB de Villiers", "YK Pathan", "Ch Gayle", "S Dhawan", "SK Raina"]),
    ("A Mishra", &["RG Sharma", "KD Karthik", "MK Pandey", "SK Raina", "DA Warner", "S Dhawan", "V Kohli"]),
    ("A Nehra", &["AM Rahane", "KD Karthik", "RG Sharma", "V Sehwag", "G Gambhir", "Ch Gayle", "MS Dhoni"]),
    ("DW Steyn", &["BB McCullum", "AB de Villiers", "AM Rahane", "V Kohli", "RG Sharma"]),
    ("P Kumar", &["S Dhawan", "SK Raina", "KD Karthik", "Ch Gayle", "V Sehwag", "AB de Villiers", "DA Warner", "YK Pathan", "BB McCullum"]),
    ("B Kumar", &["AB de Villiers", "BB McCullum", "AM Rahane", "RG Sharma", "MK Pandey", "S Dhawan", "DA Warner", "KD Karthik", "Ch Gayle"]),
    ("PP Chawla", &["PA Patel", "DA Warner", "AM Rahane", "KD Karthik", "Ch Gayle", "YK Pathan", "V Kohli"]),
    ("RV Kumar", &["BB McCullum", "DA Warner", "KD Karthik", "G Gambhir", "RV Uthappa", "AM Rahane", "AB de Villiers", "RG Sharma"]),
    ("DJ Bravo", &["MK Pandey", "DA Warner", "KD Karthik", "S Dhawan", "PA Patel", "SK Raina", "MS Dhoni"]),
    ("SL Malinga", &["SK Raina", "YK Pathan", "V Kohli", "S Dhawan", "AB de Villiers", "PA Patel", "DA Warner", "V Sehwag"]),
    ("UT Yadav", &["PA Patel", "KD Karthik", "AB de Villiers", "G Gambhir", "RV Uthappa", "V Sehwag", "MS Dhoni", "YK Pathan", "Ch Gayle"]),
    ("DS Kulkarni", &["V Kohli", "SK Raina", "BB McCullum", "MK Pandey", "YK Pathan", "KD Karthik", "RG Sharma", "DA Warner", "V Sehwag"]),
    ("JD Unadkat", &["RV Uthappa", "SK Raina", "V Kohli", "V Sehwag", "AB de Villiers", "G Gambhir", "BB McCullum", "MK Pandey", "S Dhawan"]),
    ("R Ashwin", &["RV Uthappa", "SK Raina", "BB McCullum", "AB de Villiers", "AM Rahane", "G Gambhir", "DA Warner"]),
    ("Sr Watson", &["S Dhawan", "YK Pathan", "BB McCullum", "PA Patel", "RV Uthappa", "V Sehwag", "SK Raina"]),
    ("M Morkel", &["MS Dhoni", "G Gambhir", "SK Raina", "Ch Gayle", "RV Uthappa"]),
    ("MM Sharma", &["MS Dhoni", "KD Karthik", "RV Uthappa", "PA Patel", "V Kohli", "SK Raina", "RG Sharma", "MK Pandey", "V Sehwag", "AM Rahane", "DA Warner", "YK Pathan"]),
];

/// Batsmen dismissed by `bowler`. An unknown bowler has dismissed nobody.
pub fn dismissed_by(bowler: &str) -> &'static [&'static str] {
    DISMISSALS
        .iter()
        .find(|(name, _)| *name == bowler)
        .map(|(_, dismissed)| *dismissed)
        .unwrap_or(&[])
}

pub fn bowlers() -> impl Iterator<Item = &'static str> {
    DISMISSALS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bowler_names_are_unique() {
        let mut names = bowlers().collect::<Vec<_>>();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 17);
    }

    #[test]
    fn lookup_is_exact() {
        assert!(dismissed_by("DW Steyn").contains(&"V Kohli"));
        assert!(dismissed_by("dw steyn").is_empty());
        assert!(dismissed_by("DW").is_empty());
        assert!(dismissed_by("").is_empty());
    }
}
