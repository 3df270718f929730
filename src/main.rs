//! A text-menu driver for poking at the tree by hand. All the semantics
//! live in the library; this loop only parses selections and prints results.

use plain_bst::Tree;
use text_io::read;

fn main() {
    let mut tree = Tree::new();

    loop {
        println!();
        println!("[1] Insert key");
        println!("[2] Remove key");
        println!("[3] Look up key");
        println!("[4] Current height");
        println!("[5] List keys in ascending order");
        println!("[6] Print tree");
        println!("[0] Quit");

        let choice: u32 = read!();
        match choice {
            1 => {
                println!("Key to insert:");
                let key: i64 = read!();
                if !tree.insert(key) {
                    println!("{} is already in the tree.", key);
                }
            }
            2 => {
                println!("Key to remove:");
                let key: i64 = read!();
                if !tree.remove(key) {
                    println!("{} is not in the tree.", key);
                }
            }
            3 => {
                println!("Key to look up:");
                let key: i64 = read!();
                if tree.contains(key) {
                    println!("{} is in the tree.", key);
                } else {
                    println!("{} is not in the tree.", key);
                }
            }
            4 => println!("Current height: {}", tree.height()),
            5 => {
                let keys: Vec<String> = tree.iter_inorder().map(|key| key.to_string()).collect();
                println!("{}", keys.join(" "));
            }
            6 => print!("{}", tree),
            0 => break,
            _ => continue,
        }
    }
    // Dropping the tree releases every node exactly once.
}
