//! Welcome message template.

/// Build the welcome message for a newly created account.
///
/// The username is mentioned once so the direct post reaches the new account.
pub fn welcome_message(username: &str) -> String {
    let mut status = format!("Hey @{} - welcome to Shakedown! Here are some tips:\n\n", username);
    status.push_str(
        "- Use the local timeline to find initial people to follow. Once you are following 10+ people, \
         use this tool to find more accounts you’ll enjoy https://followgraph.vercel.app/\n\n",
    );
    status.push_str(
        "- The official Mastodon phone apps aren't great - try Mammoth for iOS and Tusky for Android\n\n",
    );
    status.push_str(
        "- Following more people makes Mastodon more fun. It keeps your Home feed active. \
         So follow away! You can always unfollow later.\n\n",
    );
    status.push_str("If you have any questions, let me know!");
    status
}
