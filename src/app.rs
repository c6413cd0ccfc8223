use clap::{App, AppSettings, Arg, SubCommand};

const TEMPLATE: &'static str = "\
{bin} {version}
{author}
{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}";

const TEMPLATE_SUB: &'static str = "\
{before-help}
USAGE:
    {usage}

ARGS:
{positionals}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
unicodeset is a tool for parsing, resolving, and inspecting Unicode Set
(UTS #35) patterns.

A pattern like [[:Lu:]&[:^ASCII:]] is parsed into a syntax tree, resolved
against a property provider into a canonical interval set, and can then be
rendered as a membership test, a host-regex character class, a tagged
pattern list, or a split pattern of ranges plus string needles.";

const ABOUT_PARSE: &'static str = "\
parse reads a pattern and prints its parsed syntax tree. Useful for checking
that a pattern means what you think it means before resolving it against any
property data.
";

const ABOUT_RESOLVE: &'static str = "\
resolve reads a pattern, resolves it against the built-in property tables,
and prints its canonical interval set and any string members.
";

const ABOUT_MATCH: &'static str = "\
match reads a pattern and a value, and reports whether the value is a member
of the resolved set. The value may be a single character or a string; string
values only match an exact string member of the set.
";

const ABOUT_REGEX_CLASS: &'static str = "\
regex-class reads a pattern and prints the equivalent host-regex character
class. String members have no representation in a regex character class and
are silently dropped; use split-pattern if you need them.
";

const ABOUT_PATTERN_LIST: &'static str = "\
pattern-list reads a pattern and prints one codepoint per line. For a
top-level negated pattern ([^...]), this enumerates the pattern's body and
tags each line NEGATED, rather than enumerating the (typically enormous)
complement directly.
";

const ABOUT_SPLIT_PATTERN: &'static str = "\
split-pattern reads a pattern and prints its canonical ranges and its string
members (\"needles\") on separate lines, for feeding into a search structure
that handles multi-codepoint members separately from single-codepoint ones.
";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    let arg_pattern = Arg::with_name("pattern").required(true).help("The Unicode Set pattern.");

    let cmd_parse = SubCommand::with_name("parse")
        .author(crate_authors!())
        .version(crate_version!())
        .template(TEMPLATE_SUB)
        .about("Print a pattern's parsed syntax tree.")
        .before_help(ABOUT_PARSE)
        .arg(arg_pattern.clone());

    let cmd_resolve = SubCommand::with_name("resolve")
        .author(crate_authors!())
        .version(crate_version!())
        .template(TEMPLATE_SUB)
        .about("Print a pattern's resolved interval set and string members.")
        .before_help(ABOUT_RESOLVE)
        .arg(arg_pattern.clone());

    let cmd_match = SubCommand::with_name("match")
        .author(crate_authors!())
        .version(crate_version!())
        .template(TEMPLATE_SUB)
        .about("Test whether a value is a member of a pattern.")
        .before_help(ABOUT_MATCH)
        .arg(arg_pattern.clone())
        .arg(Arg::with_name("value").required(true).help("The value to test."));

    let cmd_regex_class = SubCommand::with_name("regex-class")
        .author(crate_authors!())
        .version(crate_version!())
        .template(TEMPLATE_SUB)
        .about("Render a pattern as a host-regex character class.")
        .before_help(ABOUT_REGEX_CLASS)
        .arg(arg_pattern.clone());

    let cmd_pattern_list = SubCommand::with_name("pattern-list")
        .author(crate_authors!())
        .version(crate_version!())
        .template(TEMPLATE_SUB)
        .about("Enumerate a pattern's codepoints, one per line.")
        .before_help(ABOUT_PATTERN_LIST)
        .arg(arg_pattern.clone());

    let cmd_split_pattern = SubCommand::with_name("split-pattern")
        .author(crate_authors!())
        .version(crate_version!())
        .template(TEMPLATE_SUB)
        .about("Split a pattern into ranges and string needles.")
        .before_help(ABOUT_SPLIT_PATTERN)
        .arg(arg_pattern.clone());

    App::new("unicodeset")
        .author(crate_authors!())
        .version(crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(cmd_parse)
        .subcommand(cmd_resolve)
        .subcommand(cmd_match)
        .subcommand(cmd_regex_class)
        .subcommand(cmd_pattern_list)
        .subcommand(cmd_split_pattern)
}
