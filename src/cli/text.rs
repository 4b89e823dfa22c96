//! Fixed user-facing text.

pub const RULE: &str = "------------------------------------------------------------";

pub const HELP: &str = "\
You can use following commands:
help -> shows help message
exit -> exits the program
current -> displays name of current state
states -> prints all states
set -> allows to set new state manually (also: state)
history -> prints visited states (history json for JSON)
create -> runs order_create on current state
pay -> runs order_pay on current state
cancel -> runs order_cancel on current state
ship -> runs order_ship on current state";

pub const WELCOME: &str = "\
Hello, welcome to order simulator, this program simulates
process of ordering a package.";

pub const OUTPUT_STYLE: &str = "\
Output style:
CURRENT STATE: message";

pub const TIPS: &str = "\
Tips:
1) You are starting with created order (state create)
2) You can set state manually with command set
3) You can create a new order once the old one was shipped or canceled";

/// Full banner printed once at startup.
pub fn banner() -> String {
    [RULE, WELCOME, RULE, HELP, RULE, OUTPUT_STYLE, RULE, TIPS, RULE]
        .join("\n")
}
