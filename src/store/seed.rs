// src/store/seed.rs

use crate::error::QuizError;
use crate::models::question::Question;

type SampleRow = (&'static str, [&'static str; 4], usize, &'static str, &'static str);

#[rustfmt::skip]
const SAMPLES: &[SampleRow] = &[
    ("What does HTML stand for?", ["Hyper Text Markup Language", "High Tech Modern Language", "Home Tool Markup Language", "Hyperlinks and Text Markup Language"], 0, "Programming", "Easy"),
    ("Which language is primarily used for web apps?", ["PHP", "Python", "JavaScript", "All of the above"], 3, "Programming", "Easy"),
    ("CSS stands for?", ["Cascading Style Sheets", "Computer Style Sheets", "Creative Style Sheets", "Colorful Style Sheets"], 0, "Programming", "Easy"),
    ("What is the correct syntax for referring to an external script?", ["<script src='file.js'>", "<script href='file.js'>", "<script name='file.js'>", "<script link='file.js'>"], 0, "Programming", "Easy"),
    ("Inside which HTML element do we put JavaScript?", ["<js>", "<scripting>", "<script>", "<javascript>"], 2, "Programming", "Easy"),
    ("Which of the following is NOT a JavaScript data type?", ["Undefined", "Number", "Boolean", "Float"], 3, "Programming", "Medium"),
    ("What is the correct way to create a function in JavaScript?", ["function myFunction()", "function:myFunction()", "function = myFunction()", "create myFunction()"], 0, "Programming", "Medium"),
    ("How do you declare a variable in JavaScript?", ["var myVar;", "variable myVar;", "v myVar;", "dim myVar;"], 0, "Programming", "Medium"),
    ("Which operator is used to assign a value to a variable?", ["*", "=", "-", "x"], 1, "Programming", "Medium"),
    ("What will 'typeof null' return?", ["null", "undefined", "object", "number"], 2, "Programming", "Medium"),
    ("What is a closure in JavaScript?", ["A function with no return value", "A function that has access to outer function's variables", "A function that cannot be called", "A function without parameters"], 1, "Programming", "Hard"),
    ("What is the time complexity of binary search?", ["O(n)", "O(log n)", "O(n^2)", "O(1)"], 1, "Programming", "Hard"),
    ("Which design pattern ensures a class has only one instance?", ["Factory", "Singleton", "Observer", "Decorator"], 1, "Programming", "Hard"),
    ("What planet is known as the Red Planet?", ["Venus", "Mars", "Jupiter", "Saturn"], 1, "Science", "Easy"),
    ("What is the chemical symbol for water?", ["H2O", "CO2", "O2", "NaCl"], 0, "Science", "Easy"),
    ("How many bones are in the adult human body?", ["196", "206", "216", "226"], 1, "Science", "Easy"),
    ("What is the center of an atom called?", ["Electron", "Proton", "Nucleus", "Neutron"], 2, "Science", "Easy"),
    ("What gas do plants absorb from the atmosphere?", ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"], 2, "Science", "Easy"),
    ("What is the powerhouse of the cell?", ["Nucleus", "Ribosome", "Mitochondria", "Endoplasmic Reticulum"], 2, "Science", "Medium"),
    ("What is the speed of light in vacuum?", ["299,792,458 m/s", "150,000,000 m/s", "350,000,000 m/s", "299,792 m/s"], 0, "Science", "Medium"),
    ("What is the pH of pure water?", ["5", "6", "7", "8"], 2, "Science", "Medium"),
    ("What is Heisenberg's Uncertainty Principle about?", ["Position and momentum cannot both be precisely known", "Energy cannot be created or destroyed", "Every action has an equal reaction", "Matter cannot be created or destroyed"], 0, "Science", "Hard"),
    ("What particle is exchanged in electromagnetic interactions?", ["Gluon", "W Boson", "Photon", "Higgs Boson"], 2, "Science", "Hard"),
    ("What is 7 × 8?", ["54", "56", "64", "72"], 1, "Mathematics", "Easy"),
    ("What is the value of π (pi) approximately?", ["2.14", "3.14", "4.14", "5.14"], 1, "Mathematics", "Easy"),
    ("What is 15% of 100?", ["10", "15", "20", "25"], 1, "Mathematics", "Easy"),
    ("What is the sum of angles in a triangle?", ["90°", "180°", "270°", "360°"], 1, "Mathematics", "Easy"),
    ("What is the square root of 144?", ["10", "11", "12", "13"], 2, "Mathematics", "Medium"),
    ("What is the derivative of x²?", ["x", "2x", "x²", "2"], 1, "Mathematics", "Medium"),
    ("What is the formula for the area of a circle?", ["πr", "πr²", "2πr", "πd"], 1, "Mathematics", "Medium"),
    ("What is Euler's number (e) approximately?", ["2.178", "2.518", "2.718", "3.142"], 2, "Mathematics", "Hard"),
    ("What is the integral of 1/x?", ["ln(x)", "x²", "e^x", "1/x²"], 0, "Mathematics", "Hard"),
    ("Who was the first President of the United States?", ["Thomas Jefferson", "George Washington", "Abraham Lincoln", "John Adams"], 1, "History", "Easy"),
    ("In which year did World War II end?", ["1943", "1944", "1945", "1946"], 2, "History", "Easy"),
    ("Who discovered America in 1492?", ["Vasco da Gama", "Christopher Columbus", "Ferdinand Magellan", "Marco Polo"], 1, "History", "Easy"),
    ("Who wrote the Declaration of Independence?", ["George Washington", "Benjamin Franklin", "Thomas Jefferson", "John Adams"], 2, "History", "Medium"),
    ("In which year did the Berlin Wall fall?", ["1987", "1988", "1989", "1990"], 2, "History", "Medium"),
    ("What was the capital of the Byzantine Empire?", ["Rome", "Athens", "Constantinople", "Alexandria"], 2, "History", "Hard"),
    ("What is the capital of France?", ["London", "Berlin", "Paris", "Madrid"], 2, "Geography", "Easy"),
    ("Which is the largest ocean?", ["Atlantic", "Indian", "Arctic", "Pacific"], 3, "Geography", "Easy"),
    ("How many continents are there?", ["5", "6", "7", "8"], 2, "Geography", "Easy"),
    ("What is the longest river in the world?", ["Amazon", "Nile", "Yangtze", "Mississippi"], 1, "Geography", "Medium"),
    ("Which country has the most time zones?", ["Russia", "USA", "China", "France"], 3, "Geography", "Medium"),
    ("What is the smallest country in the world?", ["Monaco", "Vatican City", "San Marino", "Liechtenstein"], 1, "Geography", "Hard"),
];

/// The built-in catalog loaded at start-up, in insertion order.
pub fn sample_questions() -> Result<Vec<Question>, QuizError> {
    SAMPLES
        .iter()
        .map(|(text, options, correct, category, difficulty)| {
            Question::new(
                *text,
                options.iter().map(|o| o.to_string()).collect(),
                *correct,
                *category,
                *difficulty,
            )
        })
        .collect()
}
