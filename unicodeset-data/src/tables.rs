//! Const interval tables, laid out the way a Unicode-table generator would
//! emit them: one `&[(u32, u32)]` slice per property value.
//!
//! These are a representative subset of the real Unicode Character
//! Database, not a full copy of it (property data generation is out of this
//! project's scope). Where a value appears here, its ranges are the real
//! Unicode ones so that the examples in spec.md §8 resolve correctly;
//! values this table doesn't carry at all simply aren't supported.

/// General_Category=Uppercase_Letter (a representative slice of it: the
/// Basic Latin and Latin-1 Supplement uppercase letters).
pub const GC_LU: &[(u32, u32)] = &[(0x0041, 0x005A), (0x00C0, 0x00D6), (0x00D8, 0x00DE)];

/// General_Category=Lowercase_Letter, same scope as [`GC_LU`].
pub const GC_LL: &[(u32, u32)] = &[(0x0061, 0x007A), (0x00DF, 0x00F6), (0x00F8, 0x00FF)];

/// General_Category=Titlecase_Letter.
pub const GC_LT: &[(u32, u32)] = &[(0x01C5, 0x01C5), (0x01C8, 0x01C8), (0x01CB, 0x01CB)];

/// General_Category=Modifier_Letter.
pub const GC_LM: &[(u32, u32)] = &[(0x02B0, 0x02C1)];

/// General_Category=Other_Letter.
pub const GC_LO: &[(u32, u32)] = &[(0x00AA, 0x00AA), (0x00BA, 0x00BA), (0x01BB, 0x01BB)];

/// General_Category=Nonspacing_Mark.
pub const GC_MN: &[(u32, u32)] = &[(0x0300, 0x036F)];

/// General_Category=Spacing_Mark.
pub const GC_MC: &[(u32, u32)] = &[(0x0903, 0x0903), (0x093B, 0x093B)];

/// General_Category=Enclosing_Mark.
pub const GC_ME: &[(u32, u32)] = &[(0x0488, 0x0489)];

/// General_Category=Decimal_Number. The ASCII, Arabic-Indic, and Thai
/// decimal digit ranges, to satisfy spec.md §8's `\p{Nd}`/`[:digit:]`
/// scenarios.
pub const GC_ND: &[(u32, u32)] =
    &[(0x0030, 0x0039), (0x0660, 0x0669), (0x06F0, 0x06F9), (0x0E50, 0x0E59)];

/// General_Category=Letter_Number.
pub const GC_NL: &[(u32, u32)] = &[(0x16EE, 0x16F0)];

/// General_Category=Other_Number.
pub const GC_NO: &[(u32, u32)] = &[(0x00B2, 0x00B3), (0x00B9, 0x00B9)];

/// General_Category=Connector_Punctuation.
pub const GC_PC: &[(u32, u32)] = &[(0x005F, 0x005F)];

/// General_Category=Dash_Punctuation.
pub const GC_PD: &[(u32, u32)] = &[(0x002D, 0x002D)];

/// General_Category=Open_Punctuation.
pub const GC_PS: &[(u32, u32)] = &[(0x0028, 0x0028), (0x005B, 0x005B), (0x007B, 0x007B)];

/// General_Category=Close_Punctuation.
pub const GC_PE: &[(u32, u32)] = &[(0x0029, 0x0029), (0x005D, 0x005D), (0x007D, 0x007D)];

/// General_Category=Initial_Punctuation.
pub const GC_PI: &[(u32, u32)] = &[(0x00AB, 0x00AB)];

/// General_Category=Final_Punctuation.
pub const GC_PF: &[(u32, u32)] = &[(0x00BB, 0x00BB)];

/// General_Category=Other_Punctuation.
pub const GC_PO: &[(u32, u32)] = &[(0x0021, 0x0023), (0x0025, 0x0027), (0x002E, 0x002E)];

/// General_Category=Math_Symbol.
pub const GC_SM: &[(u32, u32)] = &[(0x002B, 0x002B), (0x003C, 0x003E)];

/// General_Category=Currency_Symbol.
pub const GC_SC: &[(u32, u32)] = &[(0x0024, 0x0024), (0x00A2, 0x00A5)];

/// General_Category=Modifier_Symbol.
pub const GC_SK: &[(u32, u32)] = &[(0x005E, 0x005E), (0x0060, 0x0060)];

/// General_Category=Other_Symbol.
pub const GC_SO: &[(u32, u32)] = &[(0x00A6, 0x00A6), (0x00A9, 0x00A9), (0x00AE, 0x00AE)];

/// General_Category=Space_Separator. The exact Unicode set (spec.md §8
/// scenario 10 pins this down precisely).
pub const GC_ZS: &[(u32, u32)] = &[
    (0x0020, 0x0020),
    (0x00A0, 0x00A0),
    (0x1680, 0x1680),
    (0x2000, 0x200A),
    (0x202F, 0x202F),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
];

/// General_Category=Line_Separator.
pub const GC_ZL: &[(u32, u32)] = &[(0x2028, 0x2028)];

/// General_Category=Paragraph_Separator.
pub const GC_ZP: &[(u32, u32)] = &[(0x2029, 0x2029)];

/// General_Category=Control.
pub const GC_CC: &[(u32, u32)] = &[(0x0000, 0x001F), (0x007F, 0x009F)];

/// General_Category=Format.
pub const GC_CF: &[(u32, u32)] = &[(0x00AD, 0x00AD), (0x200B, 0x200F)];

/// General_Category=Private_Use.
pub const GC_CO: &[(u32, u32)] = &[(0xE000, 0xF8FF)];

/// General_Category=Surrogate.
pub const GC_CS: &[(u32, u32)] = &[(0xD800, 0xDFFF)];

/// Every General_Category table this crate carries, paired with its
/// two-letter code. `all_assigned` is the union of these.
pub const GENERAL_CATEGORY_TABLES: &[(&str, &[(u32, u32)])] = &[
    ("lu", GC_LU),
    ("ll", GC_LL),
    ("lt", GC_LT),
    ("lm", GC_LM),
    ("lo", GC_LO),
    ("mn", GC_MN),
    ("mc", GC_MC),
    ("me", GC_ME),
    ("nd", GC_ND),
    ("nl", GC_NL),
    ("no", GC_NO),
    ("pc", GC_PC),
    ("pd", GC_PD),
    ("ps", GC_PS),
    ("pe", GC_PE),
    ("pi", GC_PI),
    ("pf", GC_PF),
    ("po", GC_PO),
    ("sm", GC_SM),
    ("sc", GC_SC),
    ("sk", GC_SK),
    ("so", GC_SO),
    ("zs", GC_ZS),
    ("zl", GC_ZL),
    ("zp", GC_ZP),
    ("cc", GC_CC),
    ("cf", GC_CF),
    ("co", GC_CO),
    ("cs", GC_CS),
];

/// Script=Latin (Basic Latin + Latin-1 Supplement letters only).
pub const SCRIPT_LATIN: &[(u32, u32)] = &[(0x0041, 0x005A), (0x0061, 0x007A), (0x00C0, 0x02B8)];

/// Script=Greek.
pub const SCRIPT_GREEK: &[(u32, u32)] = &[(0x0370, 0x03FF)];

/// Script=Cyrillic.
pub const SCRIPT_CYRILLIC: &[(u32, u32)] = &[(0x0400, 0x04FF)];

/// Script=Arabic.
pub const SCRIPT_ARABIC: &[(u32, u32)] = &[(0x0600, 0x06FF)];

/// Script=Thai. Used directly by spec.md §8's Thai-digit scenario.
pub const SCRIPT_THAI: &[(u32, u32)] = &[(0x0E00, 0x0E7F)];

/// Every Script table this crate carries.
pub const SCRIPT_TABLES: &[(&str, &[(u32, u32)])] = &[
    ("latin", SCRIPT_LATIN),
    ("greek", SCRIPT_GREEK),
    ("cyrillic", SCRIPT_CYRILLIC),
    ("arabic", SCRIPT_ARABIC),
    ("thai", SCRIPT_THAI),
];

/// Block=Basic_Latin.
pub const BLOCK_BASIC_LATIN: &[(u32, u32)] = &[(0x0000, 0x007F)];

/// Block=Latin-1 Supplement.
pub const BLOCK_LATIN1_SUPPLEMENT: &[(u32, u32)] = &[(0x0080, 0x00FF)];

/// Every Block table this crate carries.
pub const BLOCK_TABLES: &[(&str, &[(u32, u32)])] =
    &[("basiclatin", BLOCK_BASIC_LATIN), ("latin1supplement", BLOCK_LATIN1_SUPPLEMENT)];

/// White_Space=Yes.
pub const BOOLEAN_WHITESPACE: &[(u32, u32)] =
    &[(0x0009, 0x000D), (0x0020, 0x0020), (0x0085, 0x0085), (0x00A0, 0x00A0)];

/// Quotation_Mark=Yes.
pub const BOOLEAN_QUOTATION_MARK: &[(u32, u32)] =
    &[(0x0022, 0x0022), (0x0027, 0x0027), (0x00AB, 0x00AB), (0x00BB, 0x00BB)];

/// Every boolean-property table this crate carries.
pub const BOOLEAN_TABLES: &[(&str, &[(u32, u32)])] =
    &[("whitespace", BOOLEAN_WHITESPACE), ("quotationmark", BOOLEAN_QUOTATION_MARK)];

/// Canonical_Combining_Class=230 (Above), a representative nonzero class.
pub const CCC_230: &[(u32, u32)] = &[(0x0300, 0x0314), (0x033D, 0x0344)];

/// Every Canonical_Combining_Class table this crate carries, keyed by the
/// numeric class value.
pub const CCC_TABLES: &[(u8, &[(u32, u32)])] = &[(230, CCC_230)];
