//! Built-in XSB level collection. The binary picks one by index; callers
//! embedding the engine can ignore this and parse their own layouts.

pub const LEVELS: &[&str] = &[
    r#"
######
#@$ .#
######
"#,
    r#"
######
#@$  #
# $. #
# .  #
######
"#,
    r#"
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########
"#,
    r#"
       ####
########  ##
#          ###
# @$$ ##   ..#
# $$   ##  ..#
#         ####
###########
"#,
    r#"
 ### ###
#   #  .#
#   # . #
##$     #
 # $.* #
  # $##
   #@#
    #
"#,
    r#"
   ######
####..$@#
#   #..*#
#    #* #
# $#$ ..#
# $ $ $ #
#      ##
########
"#,
];

pub fn level(number: usize) -> Option<&'static str> {
    LEVELS.get(number).copied()
}

pub fn count() -> usize {
    LEVELS.len()
}
