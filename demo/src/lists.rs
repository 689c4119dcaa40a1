use anyhow::Result;
use chiolab::{persistent::List, LinkedList, University};

/// Build the sample list by prepending, then copy parts of it with `drop` and `take`
pub fn persistent() -> Result<()> {
    let head = University::sample()
        .into_iter()
        .fold(List::nil(), |list, uni| list.add(uni));

    println!("List with every element:");
    head.show().for_each(|line| println!("{}", line));

    println!("Copy without the first 2 elements:");
    head.drop(2)?.show().for_each(|line| println!("{}", line));

    println!("Copy of the first 4 elements:");
    head.take(4)?.show().for_each(|line| println!("{}", line));
    println!();
    Ok(())
}

fn show(list: &LinkedList<University>) {
    list.show_list().for_each(|line| println!("{}", line));
}

/// Walk through every operation of the mutable list
pub fn mutable() -> Result<()> {
    let data = University::sample();
    let mut ll = LinkedList::new();

    println!("Adding two universities at the front:");
    ll.add(data[0].clone());
    ll.add(data[1].clone());
    show(&ll);

    println!("\nAdding a university at the end:");
    ll.add_to_end(data[2].clone());
    show(&ll);

    println!("\nRemoving the last element:");
    ll.remove_last()?;
    show(&ll);

    println!("\nFirst element:");
    println!("{}", ll.get()?);

    println!("\nRemoving the first element:");
    ll.remove()?;
    show(&ll);

    println!("\nIs the list empty?");
    println!("{}", ll.is_empty());

    println!("\nLength of the list:");
    println!("{}", ll.len());

    println!("\nDestroying the list:");
    ll.destroy();
    println!("Empty? {}", ll.is_empty());

    println!("\nList with every university:");
    for uni in data {
        ll.add(uni);
    }
    show(&ll);

    println!("\nNew list without the first 3 universities:");
    show(&ll.drop(3)?);

    println!("\nNew list with only the first 4 universities:");
    show(&ll.take(4)?);
    Ok(())
}
