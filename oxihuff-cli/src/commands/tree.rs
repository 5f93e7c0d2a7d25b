//! Tree command implementation.

use oxihuff_codec::HuffmanCodec;

pub fn cmd_tree(codec: &HuffmanCodec, input: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    let report = codec.run(input)?;
    let tree = &report.tree;

    println!("Huffman Tree");
    println!("============");
    println!("Weight: {}", tree.weight());
    println!("Leaves: {}", tree.leaf_count());
    println!("Nodes: {}", tree.node_count());
    println!("Height: {}", tree.height());
    println!();
    print!("{}", tree.render());

    Ok(())
}
