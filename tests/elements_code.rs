//! Integration tests for code lines
//!
//! Echo and execute directives, block statements with their end closers,
//! and the else-continuation depth rules.

use haml::compile;

#[test]
fn test_echo_directive() {
    assert_eq!(
        compile("= \"Hello World!\"").unwrap(),
        "<?php echo \"Hello World!\" ?>"
    );
}

#[test]
fn test_execute_directive() {
    assert_eq!(
        compile("- $name = \"Person\"").unwrap(),
        "<?php $name = \"Person\" ?>"
    );
}

#[test]
fn test_if_block() {
    let template = "%div\n\t- if 1 != 0\n\t\tyes, 1 is not 0";
    let expected =
        "<div>\n\t<?php if (1 != 0): ?>\n\t\tyes, 1 is not 0\n\t<?php endif ?>\n</div>";
    assert_eq!(compile(template).unwrap(), expected);
}

#[test]
fn test_if_else_block() {
    let template = "%div\n\t- if 1 != 0\n\t\tyes, 1 is not 0\n\t- else\n\t\tomg! holly crap!";
    let expected = "<div>\n\t<?php if (1 != 0): ?>\n\t\tyes, 1 is not 0\n\t<?php else: ?>\n\t\tomg! holly crap!\n\t<?php endif ?>\n</div>";
    assert_eq!(compile(template).unwrap(), expected);
}

#[test]
fn test_top_level_if_else_alignment() {
    // The else marker renders at the same depth as its if, with both
    // bodies one level deeper and a single endif closing the block.
    let template = "- if 1 != 0\n\t%p yes\n- else\n\t%p no";
    let expected =
        "<?php if (1 != 0): ?>\n\t<p>yes</p>\n<?php else: ?>\n\t<p>no</p>\n<?php endif ?>";
    assert_eq!(compile(template).unwrap(), expected);
}

#[test]
fn test_for_block() {
    let template = "%div\n\t- for $i = 0; $i < 10; $i++\n\t\tlooping\n\t\t= $i";
    let expected = "<div>\n\t<?php for ($i = 0; $i < 10; $i++): ?>\n\t\tlooping\n\t\t<?php echo $i ?>\n\t<?php endfor ?>\n</div>";
    assert_eq!(compile(template).unwrap(), expected);
}

#[test]
fn test_while_block() {
    let template = "%div\n\t- $i = 0\n\t- while $i < 10\n\t\tlooping\n\t\t= $i\n\t\t- $i++";
    let expected = "<div>\n\t<?php $i = 0 ?>\n\t<?php while ($i < 10): ?>\n\t\tlooping\n\t\t<?php echo $i ?>\n\t\t<?php $i++ ?>\n\t<?php endwhile ?>\n</div>";
    assert_eq!(compile(template).unwrap(), expected);
}

#[test]
fn test_foreach_block() {
    let template = "%div\n\t- foreach $people as $person\n\t\t= $person->name";
    let expected = "<div>\n\t<?php foreach ($people as $person): ?>\n\t\t<?php echo $person->name ?>\n\t<?php endforeach ?>\n</div>";
    assert_eq!(compile(template).unwrap(), expected);
}

#[test]
fn test_echoed_else_produces_no_output() {
    let template = "before\n= else\nafter";
    assert_eq!(compile(template).unwrap(), "before\nafter");
}

#[test]
fn test_nested_blocks_close_innermost_first() {
    let template = "- foreach $items as $item\n\t- if $item\n\t\t= $item";
    let expected = "<?php foreach ($items as $item): ?>\n\t<?php if ($item): ?>\n\t\t<?php echo $item ?>\n\t<?php endif ?>\n<?php endforeach ?>";
    assert_eq!(compile(template).unwrap(), expected);
}
