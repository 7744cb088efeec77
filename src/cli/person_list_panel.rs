use chrono::{DateTime, Local};

use crate::model::{AddressBook, Person};

/// The person list as numbered cards, the way the list panel shows it.
pub fn render_list(persons: &[&Person]) -> String {
    if persons.is_empty() {
        return "(no persons to show)".to_string();
    }
    persons
        .iter()
        .enumerate()
        .map(|(i, p)| render_card(i + 1, p))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_card(id: usize, person: &Person) -> String {
    let mut card = format!("{:>3}. {}", id, person.name());
    let groups = group_labels(person);
    if !groups.is_empty() {
        card.push_str("  ");
        card.push_str(&groups.join(" "));
    }
    card.push_str(&format!("\n     Phone: {}", person.phone()));
    card.push_str(&format!("\n     Address: {}", person.address()));
    card.push_str(&format!("\n     Email: {}", person.email()));
    card
}

/// Everything known about a person, including group information.
pub fn render_details(person: &Person, book: &AddressBook) -> String {
    let mut out = format!("Name: {}", person.name());
    out.push_str(&format!("\nPhone: {}", person.phone()));
    out.push_str(&format!("\nEmail: {}", person.email()));
    out.push_str(&format!("\nAddress: {}", person.address()));
    out.push_str(&format!(
        "\nDescription: {}",
        if person.description().is_empty() {
            "(none)"
        } else {
            person.description().as_str()
        }
    ));

    if person.tags().is_empty() {
        out.push_str("\nGroups: (none)");
    } else {
        out.push_str("\nGroups:");
        for tag in person.tags() {
            match book.find_group(tag.as_str()) {
                Some(group) => out.push_str(&format!("\n  {}", group)),
                None => out.push_str(&format!("\n  {}", tag)),
            }
        }
    }
    out
}

pub fn render_status(saved_at: Option<DateTime<Local>>) -> String {
    match saved_at {
        Some(at) => format!("Last Updated: {}", at.format("%a %b %d %H:%M:%S %Y")),
        None => "Not updated yet in this session".to_string(),
    }
}

fn group_labels(person: &Person) -> Vec<String> {
    person.tags().iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_data, Description, Group, Information, Tag};

    #[test]
    fn card_shows_index_fields_and_groups() {
        let bernice = &sample_data::sample_persons()[1];
        let card = render_card(2, bernice);
        assert!(card.starts_with("  2. Bernice Yu  [colleagues] [friends]"));
        assert!(card.contains("Phone: 99272758"));
        assert!(card.contains("Address: Blk 30 Lorong 3 Serangoon Gardens, #07-18"));
        assert!(card.contains("Email: berniceyu@example.com"));
    }

    #[test]
    fn list_numbers_from_one() {
        let persons = sample_data::sample_persons();
        let refs: Vec<&Person> = persons.iter().take(2).collect();
        let text = render_list(&refs);
        assert!(text.contains("  1. Alex Yeoh"));
        assert!(text.contains("  2. Bernice Yu"));
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render_list(&[]), "(no persons to show)");
    }

    #[test]
    fn details_include_description_and_group_information() {
        let mut book = AddressBook::new();
        book.add_group(Group::create(
            Tag::new("friends").unwrap(),
            Information::new("from school"),
        ))
        .unwrap();
        let alex = sample_data::sample_persons()[0].with_description(Description::new("Chess"));
        book.add_person(alex.clone()).unwrap();

        let text = render_details(&alex, &book);
        assert!(text.contains("Description: Chess"));
        assert!(text.contains("[friends] from school"));
    }

    #[test]
    fn status_before_any_save() {
        assert_eq!(render_status(None), "Not updated yet in this session");
    }
}
