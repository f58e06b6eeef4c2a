//! Common stylesheet fixtures for tests.
//!
//! Line numbers in comments are 0-based, matching `Position`.

use once_cell::sync::Lazy;

/// One of everything, with nesting.
///
/// ```text
///  0 @import "foo/bar";
///  3 $primary
///  6 @mixin button(...)        body lines 6..9
/// 11 @function double(...)     body lines 11..13
/// 17 #main {                   .nav block lines 18..22
/// ```
pub const THEME: &str = "\
@import \"foo/bar\";
@import url(foo.css);

$primary: #336699 !default;
$spacing: 4px;

@mixin button($a, $b: 10px, $rest...) {
  $local: $a * 2;
  padding: $b;
}

@function double($n) {
  @return $n * 2;
}

%placeholder-base { margin: 0; }

#main {
  .nav {
    $theme: dark !global;
    $nested: 1;
    color: $primary;
  }
}

input[type=\"text\"] { border: 0; }
";

pub const SELECTORS: &str = "\
.a.b, .c > .d { }
#header .title:hover { }
a[href^=\"http\"], [data-x] { }
.card {
  &:hover { }
  &-body { }
  .icon & { }
}
%base { }
.uses { @extend %base; color: #fff; }
";

pub const IMPORTS: &str = "\
@import \"a\", 'b';
@import url(\"c.css\");
@import url( d.css );
";

pub const SIBLING_BLOCKS: &str = "\
.first {
  $one: 1;
}
.second {
  $two: 2;
  .inner {
    $three: 3;
  }
}
";

/// A stylesheet big enough that a traversal takes measurable time.
pub static LARGE_STYLESHEET: Lazy<String> = Lazy::new(|| {
    let mut source = String::new();
    for i in 0..LARGE_BLOCKS {
        source.push_str(&format!(
            "$var-{i}: {i}px;\n\
             @mixin mixin-{i}($a, $b: {i}) {{\n  $inner-{i}: $a;\n}}\n\
             .class-{i} {{\n  #id-{i} {{ width: $var-{i}; }}\n}}\n"
        ));
    }
    source
});

/// Blocks in [`LARGE_STYLESHEET`]
pub const LARGE_BLOCKS: usize = 2_000;

/// Hints per block in [`LARGE_STYLESHEET`]: two variables, one mixin,
/// two arguments, one class, one id.
pub const LARGE_HINTS_PER_BLOCK: usize = 7;
