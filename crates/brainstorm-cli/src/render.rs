//! Plain terminal output for pages.

use brainstorm_application::{AdminState, HomeState, IdeaView, InquiryDeskState, WizardState};
use brainstorm_core::brainstorm::WizardStep;
use brainstorm_core::idea::GeneratedIdea;
use brainstorm_core::inquiry::{Inquiry, InquiryStatus};
use brainstorm_core::user::User;
use colored::{ColoredString, Colorize};

pub fn user(user: &User) {
    println!("{}", user.display_name().bright_green().bold());
    println!("  id:       {}", user.user_id);
    if let Some(email) = &user.email {
        println!("  email:    {email}");
    }
    if let Some(provider) = user.provider {
        println!("  provider: {provider:?}");
    }
    println!("  role:     {:?}", user.role);
}

pub fn home(state: &HomeState) {
    println!(
        "{} {}",
        format!("{}'s ideas", state.user.display_name()).bright_magenta().bold(),
        format!("({})", state.idea_count).bright_black()
    );
    if state.ideas.is_empty() {
        println!("{}", "No saved ideas yet. Try `brainstorm brainstorm`.".bright_black());
        return;
    }
    for idea in &state.ideas {
        let date = idea
            .created_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!("  {:>5}  {}  {}", idea.id, idea.title, date.bright_black());
    }
}

pub fn idea(view: &IdeaView) {
    println!("{}", view.title.bright_cyan().bold());
    if let Some(purpose) = &view.purpose {
        println!("{}", format!("purpose: {purpose}").bright_black());
    }
    println!();
    println!("{}", view.description);
    if let Some(analysis) = &view.analysis {
        println!();
        println!("{}", "Analysis".bright_blue());
        println!("{analysis}");
    }
}

pub fn generated_ideas(ideas: &[GeneratedIdea]) {
    for (index, idea) in ideas.iter().enumerate() {
        println!("{}", format!("{}. {}", index + 1, idea.title).bright_cyan().bold());
        println!("   {}", idea.description);
        if let Some(analysis) = &idea.analysis {
            println!("   {}", analysis.bright_black());
        }
        println!();
    }
}

pub fn step_header(state: &WizardState) {
    let step: WizardStep = state.step;
    println!(
        "{}",
        format!("── Step {}/5: {} ──", step.number(), step.title())
            .bright_magenta()
            .bold()
    );
    if let Some(message) = &state.last_message {
        for line in message.lines() {
            println!("{}", line.bright_blue());
        }
    }
}

fn status(status: InquiryStatus) -> ColoredString {
    match status {
        InquiryStatus::Pending => status.label().yellow(),
        InquiryStatus::Answered => status.label().green(),
        InquiryStatus::Closed => status.label().bright_black(),
    }
}

fn inquiry_row(inquiry: &Inquiry) {
    let date = inquiry
        .created_at
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    println!(
        "  {:>5}  {:<10} {}  {}",
        inquiry.id,
        status(inquiry.status),
        inquiry.title,
        date.bright_black()
    );
}

pub fn inquiry(inquiry: &Inquiry) {
    println!(
        "{} {}",
        inquiry.title.bright_cyan().bold(),
        status(inquiry.status)
    );
    println!("{}", inquiry.content);
    match &inquiry.reply {
        Some(reply) => {
            println!();
            println!("{}", "Reply".bright_blue());
            println!("{reply}");
        }
        None => println!("{}", "No reply yet.".bright_black()),
    }
}

pub fn inquiry_desk(state: &InquiryDeskState) {
    println!("{}", "My inquiries".bright_magenta().bold());
    if state.inquiries.is_empty() {
        println!("{}", "No inquiries yet.".bright_black());
    }
    state.inquiries.iter().for_each(inquiry_row);
}

pub fn admin(state: &AdminState) {
    let stats = state.stats();
    println!("{}", "All inquiries".bright_magenta().bold());
    println!(
        "  pending {}  answered {}  closed {}  total {}",
        stats.pending.to_string().yellow(),
        stats.answered.to_string().green(),
        stats.closed.to_string().bright_black(),
        stats.total
    );
    let mut shown = 0;
    for inquiry in state.visible() {
        inquiry_row(inquiry);
        shown += 1;
    }
    if shown == 0 {
        println!("{}", "Nothing matches this filter.".bright_black());
    }
}
