use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;

use crate::models::User;
use crate::query_view::ResultPage;

/// Print one page of the directory as a table (classic mode).
pub fn display_page(page: &ResultPage, query: &str, page_number: usize, show_row_numbers: bool) {
    if page.users.is_empty() {
        if query.is_empty() {
            println!("{}", "No users found.".yellow());
        } else {
            println!("{}", format!("No users match '{}'.", query).yellow());
        }
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut headers = vec!["Name", "Username", "Email", "Phone", "Company"];
    if show_row_numbers {
        headers.insert(0, "#");
    }
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );

    let offset = page_number.saturating_sub(1) * crate::query_view::PAGE_SIZE;
    for (i, user) in page.users.iter().enumerate() {
        let mut row = vec![
            user.name.clone(),
            format!("@{}", user.username),
            user.email.clone(),
            user.phone.clone(),
            user.company.name.clone(),
        ];
        if show_row_numbers {
            row.insert(0, (offset + i + 1).to_string());
        }
        table.add_row(row);
    }

    println!("{table}");
    println!(
        "\n{}",
        format!(
            "Showing {} of {} users (page {} of {})",
            page.users.len(),
            page.matching,
            page_number,
            page.total_pages
        )
        .green()
    );
}

/// Print a single record's detail sections (classic mode).
pub fn display_user(user: &User) {
    println!("{}", "Personal Information".blue().bold());
    println!("  Name:     {}", user.name);
    println!("  Username: @{}", user.username);
    println!("  Email:    {}", user.email);
    println!("  Phone:    {}", user.phone);
    println!("  Website:  {}", user.website);

    println!("\n{}", "Address".blue().bold());
    println!("  Street:  {}", user.address.street);
    println!("  Suite:   {}", user.address.suite);
    println!("  City:    {}", user.address.city);
    println!("  Zipcode: {}", user.address.zipcode);
    println!("  Geo:     {}, {}", user.address.geo.lat, user.address.geo.lng);

    println!("\n{}", "Company".blue().bold());
    println!("  Name:         {}", user.company.name);
    println!("  Catch Phrase: {}", user.company.catch_phrase);
    println!("  Business:     {}", user.company.bs);
}
