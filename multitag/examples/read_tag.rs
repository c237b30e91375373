use multitag::TagFile;
use std::env::args;
use std::path::PathBuf;

fn main() {
    let path = PathBuf::from(args().nth(1).unwrap());

    let file = TagFile::read_from_path(&path).unwrap();
    let desc = file.describe();
    println!("{} - {}", desc.artist, desc.title);
    for tag in &desc.tags {
        println!("{} ({} pictures)", tag.tag_type, tag.pictures);
        for (key, values) in &tag.items {
            println!("  {key}: {values:?}");
        }
    }
}
