/// Menu Module
///
/// The interactive session: greeting banner, main menu, dispatch loop, and
/// one handler per business operation. Every handler prompts for its fields
/// through the session's `Prompter`, then routes the statement through the
/// `StatementExecutor` with the field values bound as parameters.
use crate::core::db::{ConnectionHandle, StatementExecutor};
use crate::core::{HotelSqlError, Result};
use crate::input::Prompter;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "MAIN MENU
---------
1. Add new customer
2. Add new room
3. Add new maintenance company
4. Add new repair
5. Add new Booking
6. Assign house cleaning staff to a room
7. Raise a repair request
8. Get number of available rooms
9. Get number of booked rooms
10. Get hotel bookings for a week
11. Get top k rooms with highest price for a date range
12. Get top k highest booking price for a customer
13. Get customer total cost occurred for a give date range
14. List the repairs made by maintenance company
15. Get top k maintenance companies based on repair count
16. Get number of repairs occurred per year for a given hotel room
17. < EXIT";

/// Prints the startup banner.
pub fn greeting() {
    println!("\n\n*******************************************************");
    println!("              User Interface                           ");
    println!("*******************************************************\n");
}

/// Runs the menu loop until the exit choice is selected or input ends.
///
/// A `Statement` or `Input` failure inside a handler is reported to the
/// error stream and the loop continues; one bad statement never ends the
/// session.
pub fn run<R: BufRead, W: Write>(
    handle: &mut ConnectionHandle,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    loop {
        println!("{}", MENU);
        let choice = match prompter.choice("Please make your choice: ") {
            Ok(choice) => choice,
            // End of piped input ends the session like an explicit exit.
            Err(HotelSqlError::Input(_)) => return Ok(()),
            Err(e) => return Err(e),
        };
        debug!("menu choice {}", choice);

        if choice == 17 {
            return Ok(());
        }

        let mut executor = StatementExecutor::new(handle);
        let outcome = match choice {
            1 => add_customer(&mut executor, prompter),
            2 => add_room(&mut executor, prompter),
            3 => add_maintenance_company(&mut executor, prompter),
            4 => add_repair(&mut executor, prompter),
            5 => book_room(&mut executor, prompter),
            6 => assign_house_cleaning(&mut executor, prompter),
            7 => repair_request(&mut executor, prompter),
            8 => available_rooms(&mut executor, prompter),
            9 => booked_rooms(&mut executor, prompter),
            10 => bookings_for_week(&mut executor, prompter),
            11 => top_rooms_by_price(&mut executor, prompter),
            12 => top_bookings_for_customer(&mut executor, prompter),
            13 => total_cost_for_customer(&mut executor, prompter),
            14 => repairs_by_company(&mut executor, prompter),
            15 => top_maintenance_companies(&mut executor, prompter),
            16 => repairs_per_year(&mut executor, prompter),
            _ => {
                println!("Unrecognized choice!");
                Ok(())
            }
        };
        if let Err(e) = outcome {
            eprintln!("{}", e);
        }
    }
}

fn add_customer<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let fname = p.line("\tEnter customer first name: ")?;
    let lname = p.line("\tEnter customer last name: ")?;
    let address = p.line("\tEnter customer address: ")?;
    let phone = p.long("\tEnter customer phone number: ")?;
    let dob = p.date("\tEnter customer date of birth (YYYY-MM-DD Format): ")?;
    let gender = p.line("\tEnter customer gender (Male, Female, Other): ")?;
    executor.execute_update(
        "INSERT INTO Customer (fname, lname, Address, phNo, DOB, gender) \
         VALUES ($1, $2, $3, $4, $5, $6)",
        &[&fname, &lname, &address, &phone, &dob, &gender],
    )
}

fn add_room<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let hotel_id = p.int("\tEnter hotel ID: ")?;
    let room_no = p.int("\tEnter room number: ")?;
    let room_type = p.line("\tEnter room type: ")?;
    executor.execute_update(
        "INSERT INTO Room VALUES ($1, $2, $3)",
        &[&hotel_id, &room_no, &room_type],
    )
}

fn add_maintenance_company<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let name = p.line("\tEnter company name: ")?;
    let address = p.line("\tEnter company address: ")?;
    let certified = p.line("\tEnter if company is certified (Y or N): ")?;
    executor.execute_update(
        "INSERT INTO MaintenanceCompany (name, address, isCertified) VALUES ($1, $2, $3)",
        &[&name, &address, &certified],
    )
}

fn add_repair<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let hotel_id = p.int("\tEnter hotel ID: ")?;
    let room_no = p.int("\tEnter room number: ")?;
    let company_id = p.int("\tEnter company ID: ")?;
    let repair_date = p.date("\tEnter repair date (YYYY-MM-DD Format): ")?;
    let description = p.line("\tEnter repair description: ")?;
    let repair_type = p.line("\tEnter repair type: ")?;
    executor.execute_update(
        "INSERT INTO Repair (hotelID, roomNo, mCompany, repairDate, description, repairType) \
         VALUES ($1, $2, $3, $4, $5, $6)",
        &[
            &hotel_id,
            &room_no,
            &company_id,
            &repair_date,
            &description,
            &repair_type,
        ],
    )
}

fn book_room<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let hotel_id = p.int("\tEnter hotel ID: ")?;
    let room_no = p.int("\tEnter room number: ")?;
    let customer_id = p.int("\tEnter customer ID: ")?;
    let booking_date = p.date("\tEnter booking date (YYYY-MM-DD Format): ")?;
    let price = p.decimal("\tEnter the price: $: ")?;
    executor.execute_update(
        "INSERT INTO Booking (hotelID, roomNo, customer, bookingDate, price) \
         VALUES ($1, $2, $3, $4, $5)",
        &[&hotel_id, &room_no, &customer_id, &booking_date, &price],
    )
}

fn assign_house_cleaning<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let staff_id = p.int("\tEnter staff ID: ")?;
    let hotel_id = p.int("\tEnter hotel ID: ")?;
    let room_no = p.int("\tEnter room number: ")?;
    executor.execute_update(
        "INSERT INTO Assigned (staffID, hotelID, roomNo) VALUES ($1, $2, $3)",
        &[&staff_id, &hotel_id, &room_no],
    )
}

fn repair_request<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let manager_id = p.int("\tEnter manager ID: ")?;
    let repair_id = p.int("\tEnter repair ID: ")?;
    let request_date = p.date("\tEnter request date (YYYY-MM-DD Format): ")?;
    let description = p.line("\tEnter description: ")?;
    executor.execute_update(
        "INSERT INTO Request (managerID, repairID, requestDate, description) \
         VALUES ($1, $2, $3, $4)",
        &[&manager_id, &repair_id, &request_date, &description],
    )
}

fn available_rooms<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let hotel_id = p.int("\tEnter hotelID: ")?;
    executor.execute_query(
        "SELECT COUNT(*) AS available_rooms FROM Room WHERE hotelID = $1",
        &[&hotel_id],
    )?;
    Ok(())
}

fn booked_rooms<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let hotel_id = p.int("\tEnter hotelID: ")?;
    executor.execute_query(
        "SELECT COUNT(DISTINCT roomNo) AS booked_rooms FROM Booking WHERE hotelID = $1",
        &[&hotel_id],
    )?;
    Ok(())
}

fn bookings_for_week<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let hotel_id = p.int("\tEnter hotelID: ")?;
    let start = p.date("\tEnter date (MM/DD/YYYY Format): ")?;
    let count = executor.execute_query(
        "SELECT roomNo AS rooms_for_week FROM Booking \
         WHERE hotelID = $1 AND bookingDate BETWEEN $2 AND $2 + 6",
        &[&hotel_id, &start],
    )?;
    if count == 0 {
        println!("no rows");
    }
    Ok(())
}

fn top_rooms_by_price<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let start = p.date("\tEnter start date (MM/DD/YYYY Format): ")?;
    let end = p.date("\tEnter end date (MM/DD/YYYY Format): ")?;
    let k = i64::from(p.int("\tEnter number of rooms: ")?);
    let count = executor.execute_query(
        "SELECT B.hotelID, B.roomNo, B.price::float8 AS price \
         FROM Room R, Booking B \
         WHERE B.bookingDate BETWEEN $1 AND $2 \
           AND R.roomNo = B.roomNo AND R.hotelID = B.hotelID \
         ORDER BY B.price DESC LIMIT $3",
        &[&start, &end, &k],
    )?;
    if count == 0 {
        println!("no rows");
    }
    Ok(())
}

fn top_bookings_for_customer<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let fname = p.line("\tEnter first name: ")?;
    let lname = p.line("\tEnter last name: ")?;
    let k = i64::from(p.int("\tEnter number of bookings: ")?);
    let count = executor.execute_query(
        "SELECT B.price::float8 AS price FROM Booking B, Customer C \
         WHERE C.fname = $1 AND C.lname = $2 AND C.customerID = B.customer \
         ORDER BY B.price DESC LIMIT $3",
        &[&fname, &lname, &k],
    )?;
    if count == 0 {
        println!("no rows");
    }
    Ok(())
}

fn total_cost_for_customer<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let fname = p.line("\tEnter first name: ")?;
    let lname = p.line("\tEnter last name: ")?;
    let start = p.date("\tEnter start date: ")?;
    let end = p.date("\tEnter end date: ")?;
    let hotel_id = p.int("\tEnter hotelID: ")?;
    let count = executor.execute_query(
        "SELECT SUM(B.price)::float8 AS total FROM Booking B, Customer C \
         WHERE C.fname = $1 AND C.lname = $2 \
           AND B.bookingDate BETWEEN $3 AND $4 \
           AND C.customerID = B.customer AND B.hotelID = $5",
        &[&fname, &lname, &start, &end, &hotel_id],
    )?;
    if count == 0 {
        println!("no rows");
    }
    Ok(())
}

fn repairs_by_company<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let name = p.line("\tEnter maintenance company name: ")?;
    executor.execute_query(
        "SELECT R.repairType, R.hotelID, R.roomNo FROM Repair R, MaintenanceCompany M \
         WHERE M.name = $1 AND M.cmpID = R.mCompany",
        &[&name],
    )?;
    Ok(())
}

fn top_maintenance_companies<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let k = i64::from(p.int("\tEnter number of companies: ")?);
    let count = executor.execute_query(
        "SELECT MC.name, COUNT(*) AS repair_count \
         FROM MaintenanceCompany MC, Repair R \
         WHERE MC.cmpID = R.mCompany \
         GROUP BY MC.name ORDER BY COUNT(*) DESC LIMIT $1",
        &[&k],
    )?;
    if count == 0 {
        println!("no rows");
    }
    Ok(())
}

fn repairs_per_year<R: BufRead, W: Write>(
    executor: &mut StatementExecutor,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let hotel_id = p.int("\tEnter hotelID: ")?;
    let room_no = p.int("\tEnter room number: ")?;
    executor.execute_query(
        "SELECT COALESCE(AVG(count), 0)::float8 AS repairs_per_year FROM \
         (SELECT EXTRACT(YEAR FROM repairDate) AS repairYear, COUNT(*) \
          FROM Repair WHERE hotelID = $1 AND roomNo = $2 \
          GROUP BY EXTRACT(YEAR FROM repairDate)) AS countPerYear",
        &[&hotel_id, &room_no],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_operation() {
        for n in 1..=17 {
            assert!(
                MENU.contains(&format!("{}. ", n)),
                "menu entry {} missing",
                n
            );
        }
        assert!(MENU.contains("EXIT"));
    }
}
