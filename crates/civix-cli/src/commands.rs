//! CLI command implementations

use anyhow::{Result, bail};
use civix_core::{
    Config, DateWindow, Issue, Session, Status, StatusCounts, UserProfile, filter, policy,
};
use colored::Colorize;
use tabled::{Table, Tabled, settings::Style};

fn open_session() -> Result<Session> {
    let config = Config::load_default()?;
    if !config.display.colors {
        colored::control::set_override(false);
    }
    Ok(Session::open(config)?)
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn status_colored(status: Status) -> colored::ColoredString {
    match status {
        Status::New => "new".red(),
        Status::InProgress => "in_progress".yellow(),
        Status::Completed => "completed".green(),
        Status::Rejected => "rejected".dimmed(),
    }
}

fn print_issue_line(issue: &Issue) {
    println!(
        "{} [{}] {} - {}",
        issue.id.cyan(),
        issue.category.blue(),
        status_colored(issue.status),
        issue.title
    );
}

pub fn dashboard(json: bool) -> Result<()> {
    let session = open_session()?;
    let counts = StatusCounts::tally(session.lifecycle.store().all());

    if json {
        println!(
            "{}",
            serde_json::json!({
                "new_reports": counts.new,
                "total_issues": counts.total,
                "in_progress": counts.in_progress,
                "completed": counts.completed,
                "rejected": counts.rejected,
            })
        );
    } else {
        println!("{}", "Dashboard".bold());
        println!();
        println!("  New Reports:  {}", counts.new.to_string().red());
        println!("  Total Issues: {}", counts.total.to_string().bold());
        println!("  In Progress:  {}", counts.in_progress.to_string().yellow());
        println!("  Completed:    {}", counts.completed.to_string().green());
        println!("  Rejected:     {}", counts.rejected.to_string().dimmed());
    }

    Ok(())
}

pub fn list(status: Option<String>, category: Option<String>, json: bool) -> Result<()> {
    let session = open_session()?;
    let status = status.map(|s| s.parse::<Status>()).transpose()?;
    let issues = filter::filter_issues(
        session.lifecycle.store().all(),
        status,
        category.as_deref(),
    );

    if json {
        println!("{}", serde_json::to_string(&issues)?);
    } else if issues.is_empty() {
        println!("No issues match the current filters.");
    } else {
        for issue in issues {
            print_issue_line(issue);
        }
    }

    Ok(())
}

pub fn categories(json: bool) -> Result<()> {
    let session = open_session()?;
    let categories = filter::categories(session.lifecycle.store().all());

    if json {
        println!("{}", serde_json::to_string(&categories)?);
    } else {
        for category in categories {
            println!("{category}");
        }
    }

    Ok(())
}

pub fn show(id: &str, json: bool) -> Result<()> {
    let session = open_session()?;
    let issue = session
        .lifecycle
        .store()
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Issue not found: {id}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(issue)?);
    } else {
        let date_format = &session.config.display.date_format;
        println!("{} {}", issue.id.cyan().bold(), issue.title.bold());
        println!();
        println!("Status:    {}", status_colored(issue.status));
        println!("Category:  {}", issue.category);
        println!("Submitted: {} by {}", issue.date.format(date_format), issue.submitted_by);
        println!("Location:  {}", issue.location);
        println!("Assigned:  {}", issue.assigned_to);
        println!("Image:     {}", issue.image_url);
        println!();
        println!("{}", "Description:".bold());
        println!("{}", issue.description);
        if !issue.notes.is_empty() {
            println!();
            println!("{}", "Official Notes:".bold());
            println!("{}", issue.notes);
        }
        let actions = policy::quick_actions(issue.status);
        if !actions.is_empty() {
            println!();
            println!("Quick actions: acknowledge, implement, reject");
        }
    }

    Ok(())
}

pub fn update(
    id: &str,
    status: Option<String>,
    assign: Option<String>,
    notes: Option<String>,
    reason: Option<String>,
    json: bool,
) -> Result<()> {
    let mut session = open_session()?;
    let current = session
        .lifecycle
        .store()
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Issue not found: {id}"))?;

    let mut updated = current.clone();
    if let Some(s) = status {
        updated.status = s.parse()?;
    }
    if let Some(dept) = assign {
        updated.assigned_to = dept;
    }
    if let Some(n) = notes {
        updated.notes = n;
    }

    let is_rejecting = policy::is_rejecting_transition(current.status, updated.status);
    if is_rejecting {
        let Some(reason) = reason else {
            bail!("Rejecting an issue requires --reason");
        };
        session.lifecycle.update_issue(updated, true);
        let rejected = session.lifecycle.submit_rejection(&reason)?;
        if json {
            println!("{}", serde_json::to_string(&rejected)?);
        } else {
            println!("{} Issue has been rejected.", "✓".green());
        }
    } else {
        session.lifecycle.update_issue(updated.clone(), false);
        if json {
            println!("{}", serde_json::to_string(&updated)?);
        } else {
            println!("{} Issue updated successfully.", "✓".green());
        }
    }

    Ok(())
}

pub fn acknowledge(id: &str, json: bool) -> Result<()> {
    let mut session = open_session()?;
    let issue = session.lifecycle.acknowledge(id)?;

    if json {
        println!("{}", serde_json::to_string(&issue)?);
    } else {
        println!("{} Issue acknowledged.", "✓".green());
        print_issue_line(&issue);
    }

    Ok(())
}

pub fn implement(id: &str, json: bool) -> Result<()> {
    let mut session = open_session()?;
    let issue = session.lifecycle.implement(id)?;

    if json {
        println!("{}", serde_json::to_string(&issue)?);
    } else {
        println!(
            "{} Issue is now In Progress (assigned to {}).",
            "✓".green(),
            issue.assigned_to
        );
    }

    Ok(())
}

pub fn reject(id: &str, reason: &str, json: bool) -> Result<()> {
    let mut session = open_session()?;
    let current = session
        .lifecycle
        .store()
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Issue not found: {id}"))?;

    let mut staged = current.clone();
    staged.status = Status::Rejected;
    session.lifecycle.update_issue(staged, true);
    let rejected = session.lifecycle.submit_rejection(reason)?;

    if json {
        println!("{}", serde_json::to_string(&rejected)?);
    } else {
        println!("{} Issue has been rejected.", "✓".green());
        print_issue_line(&rejected);
    }

    Ok(())
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Completed")]
    date: String,
}

pub fn records(window: &str, json: bool) -> Result<()> {
    let session = open_session()?;
    let window: DateWindow = window.parse()?;
    let records = filter::completed_records(session.lifecycle.store().all(), window, today());

    if json {
        println!("{}", serde_json::to_string(&records)?);
    } else if records.is_empty() {
        println!("No completed issues match the current filters.");
    } else {
        let date_format = session.config.display.date_format.clone();
        let rows: Vec<RecordRow> = records
            .iter()
            .map(|issue| RecordRow {
                id: issue.id.clone(),
                title: issue.title.clone(),
                category: issue.category.clone(),
                date: issue.date.format(&date_format).to_string(),
            })
            .collect();
        println!("{}", Table::new(rows).with(Style::rounded()));
    }

    Ok(())
}

pub fn feedback(window: &str, area: Option<String>, json: bool) -> Result<()> {
    let session = open_session()?;
    let window: DateWindow = window.parse()?;
    let entries = civix_core::feedback::filter_feedback(
        session.feedback.all(),
        window,
        area.as_deref(),
        today(),
    );

    if json {
        println!("{}", serde_json::to_string(&entries)?);
    } else if entries.is_empty() {
        println!("No feedback matches the current filters.");
    } else {
        for entry in entries {
            let stars = "★".repeat(entry.rating as usize);
            let blanks = "☆".repeat(5usize.saturating_sub(entry.rating as usize));
            println!(
                "{}{} {} ({}, {})",
                stars.yellow(),
                blanks.dimmed(),
                entry.name.bold(),
                entry.area,
                entry.date
            );
            println!("  {}", entry.comment);
        }
    }

    Ok(())
}

pub fn profile_show(json: bool) -> Result<()> {
    let session = open_session()?;
    let profile = session.profile.get();

    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
    } else {
        println!("{}", profile.name.bold());
        println!("Email:      {}", profile.email);
        println!("Age:        {}", profile.age);
        println!("Department: {}", profile.department);
        println!("Gender:     {}", profile.gender);
        println!("State:      {}", profile.state);
        println!("Country:    {}", profile.country);
        println!("Avatar:     {}", profile.avatar_url);
    }

    Ok(())
}

/// Field edits for `profile set`; unset fields keep their current value
pub struct ProfileEdit {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub age: Option<u32>,
    pub department: Option<String>,
    pub gender: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

pub fn profile_set(edit: ProfileEdit, json: bool) -> Result<()> {
    let mut session = open_session()?;

    let current = session.profile.get().clone();
    let profile = UserProfile {
        name: edit.name.unwrap_or(current.name),
        email: edit.email.unwrap_or(current.email),
        avatar_url: edit.avatar_url.unwrap_or(current.avatar_url),
        age: edit.age.unwrap_or(current.age),
        department: edit.department.unwrap_or(current.department),
        gender: edit.gender.unwrap_or(current.gender),
        state: edit.state.unwrap_or(current.state),
        country: edit.country.unwrap_or(current.country),
    };
    session.profile.save(profile.clone())?;

    if json {
        println!("{}", serde_json::to_string(&profile)?);
    } else {
        println!("{} Profile updated successfully!", "✓".green());
    }

    Ok(())
}
