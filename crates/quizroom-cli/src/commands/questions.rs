use quizroom_core::QuestionBank;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let bank = QuestionBank::builtin();
    if json {
        println!("{}", serde_json::to_string_pretty(&bank)?);
        return Ok(());
    }
    for (i, question) in bank.iter().enumerate() {
        println!("{}. {}", i + 1, question.prompt());
        for (j, option) in question.options().iter().enumerate() {
            let mark = if j == question.correct_index() { "*" } else { " " };
            println!("   {mark} opt[{j}] {option}");
        }
    }
    Ok(())
}
