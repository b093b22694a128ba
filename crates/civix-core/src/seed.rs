//! Seed data for the session stores
//!
//! The dashboard runs against fixed mock collections; both stores are
//! populated from these lists at startup.

use chrono::NaiveDate;

use crate::feedback::Feedback;
use crate::issue::{Issue, Status, UNASSIGNED};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn issue(
    id: &str,
    title: &str,
    category: &str,
    status: Status,
    submitted_by: &str,
    date: NaiveDate,
    description: &str,
    location: &str,
    image_url: &str,
    assigned_to: &str,
    notes: &str,
) -> Issue {
    Issue {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        submitted_by: submitted_by.to_string(),
        date,
        description: description.to_string(),
        location: location.to_string(),
        image_url: image_url.to_string(),
        status,
        assigned_to: assigned_to.to_string(),
        notes: notes.to_string(),
    }
}

/// The fixed issue list the session starts from
pub fn seed_issues() -> Vec<Issue> {
    vec![
        issue(
            "1",
            "Broken streetlight on Main St",
            "Streetlight",
            Status::New,
            "John Doe",
            date(2023, 10, 26),
            "The streetlight at the corner of Main St and 1st Ave has been flickering for a week and is now completely out.",
            "Main St & 1st Ave",
            "https://picsum.photos/seed/streetlight/400/300",
            UNASSIGNED,
            "",
        ),
        issue(
            "2",
            "Pothole on Elm St",
            "Roads",
            Status::InProgress,
            "Jane Smith",
            date(2023, 10, 25),
            "A large pothole has formed on Elm St near the intersection with Oak Ave. It is a hazard to vehicles.",
            "Elm St & Oak Ave",
            "https://picsum.photos/seed/pothole/400/300",
            "Roads",
            "Scheduled for repair on 2023-10-28.",
        ),
        issue(
            "3",
            "Overflowing trash can at park",
            "Sanitation",
            Status::Completed,
            "Peter Jones",
            date(2023, 10, 24),
            "The main trash can near the playground at Central Park is overflowing.",
            "Central Park Playground",
            "https://picsum.photos/seed/trash/400/300",
            "Sanitation",
            "Cleaned up on 2023-10-24.",
        ),
        issue(
            "4",
            "Leaky fire hydrant",
            "Water",
            Status::New,
            "Mary Johnson",
            date(2023, 10, 26),
            "A fire hydrant is leaking water continuously at the end of Pine St.",
            "End of Pine St",
            "https://picsum.photos/seed/hydrant/400/300",
            UNASSIGNED,
            "",
        ),
        issue(
            "5",
            "Graffiti on city hall",
            "Vandalism",
            Status::Rejected,
            "Sam Wilson",
            date(2023, 10, 23),
            "There is graffiti on the east wall of city hall.",
            "City Hall, East Wall",
            "https://picsum.photos/seed/graffiti/400/300",
            "Vandalism",
            "Rejection Reason: This is a commissioned mural, not graffiti.",
        ),
        issue(
            "6",
            "Water supply issue in Sector 4",
            "Water",
            Status::InProgress,
            "Emily Davis",
            date(2023, 10, 25),
            "Households in Sector 4 have had low water pressure for three days.",
            "Sector 4",
            "https://picsum.photos/seed/watersupply/400/300",
            "Water",
            "Pressure readings taken; valve inspection scheduled.",
        ),
        issue(
            "7",
            "Fallen tree blocking sidewalk",
            "Parks",
            Status::Completed,
            "Chris Brown",
            date(2023, 10, 22),
            "A tree came down in last night's storm and is blocking the sidewalk along Riverside Walk.",
            "Riverside Walk",
            "https://picsum.photos/seed/tree/400/300",
            "Parks",
            "Cleared on 2023-10-23.",
        ),
    ]
}

fn feedback(id: &str, name: &str, date: NaiveDate, area: &str, rating: u8, comment: &str) -> Feedback {
    Feedback {
        id: id.to_string(),
        name: name.to_string(),
        date,
        area: area.to_string(),
        rating,
        comment: comment.to_string(),
    }
}

/// The fixed feedback list the session starts from
pub fn seed_feedback() -> Vec<Feedback> {
    vec![
        feedback(
            "f1",
            "Alice",
            date(2024, 7, 22),
            "Downtown",
            5,
            "The new park is beautiful and very well-maintained. Great job!",
        ),
        feedback(
            "f2",
            "Bob",
            date(2024, 7, 21),
            "North Suburbs",
            4,
            "Road repairs on Maple St were completed quickly. Much appreciated.",
        ),
        feedback(
            "f3",
            "Charlie",
            date(2024, 6, 15),
            "Downtown",
            2,
            "The public library hours are too short. It closes before I can get there after work.",
        ),
        feedback(
            "f4",
            "Diana",
            date(2024, 7, 22),
            "West End",
            5,
            "The city festival was a huge success! Very well organized.",
        ),
        feedback(
            "f5",
            "Ethan",
            date(2023, 11, 1),
            "North Suburbs",
            3,
            "Trash pickup is often delayed on my street.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_issue_ids_unique() {
        let issues = seed_issues();
        let ids: HashSet<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), issues.len());
    }

    #[test]
    fn test_feedback_ids_unique_and_ratings_in_range() {
        let feedback = seed_feedback();
        let ids: HashSet<&str> = feedback.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), feedback.len());
        assert!(feedback.iter().all(|f| (1..=5).contains(&f.rating)));
    }
}
